use std::sync::Arc;

use veo_upload_server::config::{AppState, Config};
use veo_upload_server::generator::MockVeoGenerator;
use veo_upload_server::logger;
use veo_upload_server::server::{self, ServerLoopConfig, SignalHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging)?;

    // Multi-threaded runtime; `server.workers` overrides the CPU-count default
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let state = AppState::from_config(&cfg, Arc::new(MockVeoGenerator::new()));
    state.prepare_upload_dir()?;

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&listener.local_addr()?, &cfg);

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::start_server_loop(
        listener,
        Arc::new(state),
        ServerLoopConfig {
            keep_alive: cfg.performance.keep_alive,
            shutdown: Arc::clone(&signals.shutdown),
        },
    )
    .await?;

    Ok(())
}
