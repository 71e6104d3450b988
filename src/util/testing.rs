// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Board, Note};
use crate::infrastructure::seed::demo_notes;

/// The two notes used throughout the tests and the demo binary.
///
/// ```
/// use storyboard::util::testing::sample_notes;
///
/// let notes = sample_notes();
/// assert_eq!(notes[1].text(), "text hei hello hola");
/// ```
pub fn sample_notes() -> Vec<Note> {
    demo_notes()
}

/// A board holding [`sample_notes`] in order.
pub fn sample_board() -> Board {
    sample_notes().into_iter().collect()
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

/// Test logs only show events emitted by this crate.
fn is_crate_target(target: &str) -> bool {
    target == "storyboard" || target.starts_with("storyboard::")
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let module_filter = filter_fn(|metadata| is_crate_target(metadata.target()));

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
