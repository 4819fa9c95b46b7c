//! Signoff CLI - Render and advance approval workflows stored in message attachments

use clap::Parser;
use signoff::cli::{Cli, Commands};
use signoff::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for JSON output
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> signoff::Result<()> {
    let cwd = cli.cwd.as_deref();
    let config = cli.config.as_deref();

    match cli.command {
        Some(Commands::Render { definition, output }) => {
            signoff::cli::commands::render::run(cwd, config, definition.as_deref(), output.as_deref())
                .await
        }
        Some(Commands::Approve {
            key,
            by,
            attachments,
            output,
        }) => {
            signoff::cli::commands::approve::run(
                cwd,
                config,
                &key,
                &by,
                attachments.as_deref(),
                output.as_deref(),
            )
            .await
        }
        Some(Commands::Status { attachments, json }) => {
            signoff::cli::commands::status::run(cwd, config, attachments.as_deref(), json).await
        }
        Some(Commands::Handle { payload, output }) => {
            signoff::cli::commands::handle::run(cwd, config, payload.as_deref(), output.as_deref())
                .await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
