//! Runs both delayed Lotka-Volterra experiments with the reference settings.
//!
//! Writes `results1.png` (phase plane per delay) and `results2.png` (time per
//! worker-pool size) to the current directory. Takes no arguments; log
//! verbosity follows `RUST_LOG` and defaults to `info`.

use std::error::Error;

use predprey::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if !predprey_plot::text_font_available() {
        warn!("no sans-serif font found, saving the plots will fail");
    }

    let config = Config::default();
    let report = predprey::run(&config)?;

    for timing in &report.timings {
        info!(
            workers = timing.workers,
            seconds = timing.elapsed.as_secs_f64(),
            "timing"
        );
    }

    Ok(())
}
