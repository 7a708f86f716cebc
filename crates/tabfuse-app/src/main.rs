mod app_state;
mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "tabfuse=info";

fn init_logging(level: Option<&str>) {
    let directive = level
        .and_then(|l| l.parse().ok())
        .or_else(|| DEFAULT_LOG_DIRECTIVE.parse().ok());

    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("TabFuse v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(&args).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
