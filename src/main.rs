use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use greeter::domain::ports::GreetingPort;
use greeter::infrastructure::{AppConfig, CliArgs, HttpGreetingClient, StorageManager};
use greeter::presentation::{App, GreetingScreen, greet_once};

fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if !interactive {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(());
    }

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> Result<AppConfig> {
    let mut config = match StorageManager::new() {
        Ok(storage) => storage.load_config(args.config.as_deref())?,
        Err(_) => AppConfig::default(),
    };
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let mut args = CliArgs::parse();
    let one_shot_name = args.name.take();
    let config = load_config(args)?;

    init_logging(&config, one_shot_name.is_none())?;

    info!(
        version = greeter::VERSION,
        endpoint = %config.endpoint,
        on_failure = %config.on_failure,
        "Starting greeter"
    );

    let greeting_port: Arc<dyn GreetingPort> = Arc::new(HttpGreetingClient::with_timeout(
        config.endpoint.clone(),
        config.timeout(),
    )?);

    if let Some(name) = one_shot_name {
        let greeting = greet_once(greeting_port, name, config.on_failure).await?;
        println!("{greeting}");
        return Ok(());
    }

    if config.skip_health_check {
        warn!("Startup health check disabled");
    }

    let screen = GreetingScreen::new().with_timestamp_format(config.ui.timestamp_format.clone());
    let app = App::new(greeting_port, screen, config.on_failure);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, !config.skip_health_check).await;

    ratatui::restore();

    result
}
