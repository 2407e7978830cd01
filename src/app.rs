use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::AppConfig;
use crate::interfaces::cli::{execute, Args};

pub fn run() {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref());
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_level);

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "Failed to start async runtime");
            std::process::exit(1);
        }
    };

    match runtime.block_on(execute(&args, config)) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!(error = %err, file = %args.file.display(), "Profiling failed");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
