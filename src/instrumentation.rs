//! Span timing for the search entry points.
//!
//! Enabled with `--features instrumentation`. Every `#[instrument]`ed
//! function is timed on entry and exit, and the totals are printed to stderr
//! when the command finishes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Span name -> (calls, total nanoseconds). Compare runs games on several
/// threads, so the table is shared behind a lock.
static TIMINGS: Lazy<Mutex<HashMap<&'static str, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        if let Ok(mut timings) = TIMINGS.lock() {
            let entry = timings.entry(span.name()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += started.elapsed().as_nanos() as u64;
        }
    }
}

/// Installs the timing layer. Span events are also printed when RUST_LOG is
/// set to anything but `off`.
pub fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let env_filter = std::env::var("RUST_LOG").unwrap_or_default();
    let result = if env_filter.is_empty() || env_filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt::layer().with_target(false).compact());
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(err) = result {
        eprintln!("Failed to set tracing subscriber: {}", err);
    }
}

/// Prints calls, total and average time per instrumented span, slowest
/// first.
pub fn print_timing_statistics() {
    let timings = match TIMINGS.lock() {
        Ok(timings) => timings,
        Err(_) => return,
    };
    if timings.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:<30} {:>10} {:>12} {:>12}", "Span", "Calls", "Total (ms)", "Avg (µs)");
    eprintln!("{:-<67}", "");
    for (name, (calls, nanos)) in entries {
        let total_ms = *nanos as f64 / 1_000_000.;
        let average_us = *nanos as f64 / *calls as f64 / 1_000.;
        eprintln!("{:<30} {:>10} {:>12.2} {:>12.2}", name, calls, total_ms, average_us);
    }
}
