mod cli;

use cli::commands::Command;
use cli::Reversi;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    reversi::instrumentation::init_tracing();

    Reversi::from_args().execute();

    #[cfg(feature = "instrumentation")]
    reversi::instrumentation::print_timing_statistics();
}
