//! # homesimd — homesim daemon
//!
//! Composition root that wires the adapters together and runs the simulator.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize diagnostic logging (`tracing`)
//! - Construct the sensor log sink, value source, and event bus (adapters)
//! - Construct the controller, injecting adapters via port traits
//! - Spawn the controller task and the periodic automation loop
//! - Run the startup sequence: discover devices, evaluate the rule once
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tokio::sync::broadcast;

use homesim_adapter_logfile::FileLogSink;
use homesim_adapter_rand::ThreadRngSource;
use homesim_app::controller::Controller;
use homesim_app::event_bus::InProcessEventBus;
use homesim_app::runtime;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let sink = FileLogSink::new(&config.log.path);
    let bus = InProcessEventBus::new(256);
    let mut feed = bus.subscribe();

    // Controller task
    let controller = Controller::new(sink, ThreadRngSource, bus)
        .with_automation(config.automation_status());
    let (handle, controller_task) = runtime::spawn(controller);

    // Startup sequence: discover the device set and evaluate the rule once.
    handle.discover_devices().await?;
    handle.apply_automation_rule().await?;

    for device in handle.snapshot().devices {
        tracing::info!("{} ({})", device.status_text, device.label_text);
    }
    tracing::info!(
        status = %handle.snapshot().automation,
        log = %config.log.path.display(),
        "homesimd running"
    );

    // Background automation loop and live event feed.
    let automation_loop = runtime::spawn_automation_loop(handle.clone(), config.intervals());
    let feed_task = tokio::spawn(async move {
        loop {
            match feed.recv().await {
                Ok(event) => tracing::info!(device = event.device_index, "{}", event.entry),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event feed lagging");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");

    automation_loop.abort();
    feed_task.abort();
    drop(handle);
    controller_task.await?;

    Ok(())
}
