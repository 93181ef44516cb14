//! HeadTrace capture binary
//!
//! Records a head-orientation trace to disk using the demo motion source.
//! Pass a JSON config path as the first argument, or run with defaults.
//! Ctrl-C ends the run cleanly.

use anyhow::Context;
use headtrace_core::prelude::*;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            CaptureConfig::load(&path).with_context(|| format!("loading config from {path}"))?
        }
        None => CaptureConfig::default(),
    };

    tracing::info!(
        folder = %config.storage_folder.display(),
        log_id = %config.log_id,
        rate_hz = config.sample_rate_hz,
        "starting capture"
    );

    SessionManifest::new(&config)
        .save(&config.storage_folder)
        .context("writing session manifest")?;

    let mut writer = TraceWriter::new(&config.storage_folder, &config.log_id);
    let mut motion = DemoHeadMotion::new();

    writer.start().context("starting run")?;

    let started = Instant::now();
    let mut ticker =
        tokio::time::interval(Duration::from_secs_f64(1.0 / config.sample_rate_hz));
    let mut frame_id: u64 = 0;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let orientation = motion.update(started.elapsed().as_millis() as u64);
                let sample = HeadSample::new(Timestamp::now(), orientation, frame_id);
                writer.add_log(&sample).context("writing sample")?;
                frame_id += 1;
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupt received, stopping");
                break;
            }
        }
    }

    writer.stop().context("closing run file")?;
    tracing::info!(
        frames = frame_id,
        path = %writer.run_path(writer.run_id()).display(),
        "capture finished"
    );
    Ok(())
}
