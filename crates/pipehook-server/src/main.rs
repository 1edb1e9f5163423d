//! pipehook-server - pipeline hook plugin daemon
//!
//! Serves hook discovery and task build over a unix domain socket.

use tokio::net::UnixListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod routes;
mod state;

use pipehook_core::HookCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so its log filter can seed the subscriber
    let config = config::Config::load()?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(config.log_filter.parse()?))
        .init();

    info!("pipehook-server v{}", env!("CARGO_PKG_VERSION"));
    info!("Config loaded from {:?}", config.config_path);

    // Check for existing server
    if config.pid_file.exists() {
        let pid_str = std::fs::read_to_string(&config.pid_file)?;
        let pid: i32 = pid_str.trim().parse()?;

        if process_exists(pid) {
            anyhow::bail!("Plugin already running with PID {}", pid);
        }

        // Clean up stale files
        info!("Cleaning up stale PID file from previous crash");
        let _ = std::fs::remove_file(&config.pid_file);
        let _ = std::fs::remove_file(&config.socket_path);
    }

    // Catalog construction failures are startup errors, never request-time
    let catalog = HookCatalog::builtin()?;
    info!(
        pipeline_type = catalog.pipeline_type(),
        hooks = catalog.metadata().len(),
        "catalog ready"
    );

    let state = state::AppState::new(config.clone(), catalog);
    let app = routes::create_router(state);

    let _ = std::fs::remove_file(&config.socket_path);
    let listener = UnixListener::bind(&config.socket_path)?;
    std::fs::write(&config.pid_file, std::process::id().to_string())?;
    info!("Listening on {:?}", config.socket_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    let _ = std::fs::remove_file(&config.socket_path);
    let _ = std::fs::remove_file(&config.pid_file);

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Check if a process exists by PID
fn process_exists(pid: i32) -> bool {
    // On Unix, sending signal 0 checks if process exists
    unsafe { libc::kill(pid, 0) == 0 }
}
