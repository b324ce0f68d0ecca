use amphibians::cli::Cli;
use amphibians::config::Config;
use amphibians::gateway::{AmphibianRepository, NetworkAmphibianRepository};
use amphibians::logging::{init_tracing, LogTarget};
use amphibians::print::render_cards;
use amphibians::shutdown::ShutdownCoordinator;
use amphibians::ui::view_state::ViewStateController;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let repository = NetworkAmphibianRepository::from_config(&config)?;

    if cli.print {
        init_tracing(&config.logging.level, &LogTarget::Stderr)
            .context("Failed to initialize logging")?;
        return runtime.block_on(print_once(&repository));
    }

    let log_target = LogTarget::from_config(&config.logging);
    init_tracing(&config.logging.level, &log_target).context("Failed to initialize logging")?;
    tracing::info!(endpoint = %repository.endpoint(), "Starting amphibians");

    run_ui(&runtime, &config, repository)
}

fn run_ui(
    runtime: &tokio::runtime::Runtime,
    config: &Config,
    repository: NetworkAmphibianRepository,
) -> Result<()> {
    // The UI loop blocks this thread; fetches are spawned onto the runtime.
    let _enter = runtime.enter();
    let shutdown = ShutdownCoordinator::new();
    shutdown.install_signal_handlers(runtime.handle());

    let controller = ViewStateController::new(Arc::new(repository));
    amphibians::ui::run(
        controller,
        config.tick_rate(),
        shutdown.handle(),
        runtime.handle(),
    )
    .context("Terminal UI failed")
}

async fn print_once(repository: &NetworkAmphibianRepository) -> Result<()> {
    let amphibians = repository
        .fetch_amphibians()
        .await
        .with_context(|| format!("Failed to fetch amphibians from {}", repository.endpoint()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_cards(&amphibians).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
