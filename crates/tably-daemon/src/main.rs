//! Daemon binary for the tably reservation board.
//!
//! Wires the status register, the HTTP + `WebSocket` server, and the
//! daily rollover scheduler together and runs until Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tably.yaml` (or `TABLY_CONFIG`) and
//!    initialize structured logging (tracing)
//! 2. Validate the rollover schedule
//! 3. Create the status register over an in-memory store
//! 4. Seed an initial reservation if none exists
//! 5. Spawn the server on a background task
//! 6. Run the rollover scheduler loop until Ctrl-C

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tably_core::{DaemonConfig, InMemoryStore, RolloverSchedule, StatusRegister};
use tably_server::{AppState, spawn_server};

use crate::error::DaemonError;

/// Application entry point for the daemon.
///
/// # Errors
///
/// Returns an error if configuration, the rollover schedule, or server
/// startup fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration, then initialize structured logging. The
    //    config's filter applies only when RUST_LOG is unset.
    let config = load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone())),
        )
        .with_target(true)
        .init();

    info!("tably-daemon starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        rollover_hour = config.rollover.hour,
        rollover_minute = config.rollover.minute,
        "Configuration loaded"
    );

    // 2. Validate the rollover schedule before anything is spawned.
    let schedule = RolloverSchedule::new(config.rollover.hour, config.rollover.minute)
        .map_err(DaemonError::from)?;

    // 3. Create the status register.
    let register = Arc::new(StatusRegister::new(Box::new(InMemoryStore::new())));

    // 4. Seed an initial reservation so the first observer has
    //    something to catch up on.
    if register.latest().await.is_none() {
        let seeded = register.create().await;
        info!(id = %seeded.id, "seeded initial reservation");
    }

    // 5. Spawn the HTTP + WebSocket server.
    let state = Arc::new(AppState::new(Arc::clone(&register)));
    let server_handle =
        spawn_server(&config.server, Arc::clone(&state)).map_err(DaemonError::from)?;
    info!(port = config.server.port, "server started");

    // 6. Rollover scheduler loop: once a day, create a fresh record
    //    and announce it exactly as a manual update would.
    loop {
        let wait = schedule.until_next(Utc::now());
        info!(seconds = wait.as_secs(), "next rollover scheduled");

        tokio::select! {
            () = tokio::time::sleep(wait) => {
                let record = state.register.create().await;
                let delivered = state.broadcaster.announce(&record).await;
                info!(id = %record.id, delivered, "daily rollover complete");
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!("failed to listen for shutdown signal: {e}");
                }
                info!("shutdown signal received");
                break;
            }
        }
    }

    server_handle.abort();
    info!("tably-daemon exited");
    Ok(())
}

/// Load configuration from `TABLY_CONFIG` (default `tably.yaml`).
///
/// A missing file falls back to defaults; a present-but-invalid file is
/// a startup error.
fn load_config() -> Result<DaemonConfig, DaemonError> {
    let path = std::env::var("TABLY_CONFIG")
        .map_or_else(|_| PathBuf::from("tably.yaml"), PathBuf::from);

    if path.exists() {
        Ok(DaemonConfig::load(&path)?)
    } else {
        Ok(DaemonConfig::default())
    }
}
