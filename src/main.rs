use clap::Parser;
use site24x7_cli::utils::error::ErrorSeverity;
use site24x7_cli::utils::logger;
use site24x7_cli::{app, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    logger::init_cli_logger(cli.verbose, quiet);
    tracing::debug!("Starting site24x7 CLI");

    match app::run(cli).await {
        Ok(output) => {
            if !quiet && !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            let severity = e.severity();

            // Not found and conflict are reported but are not failures
            if severity == ErrorSeverity::Low {
                tracing::debug!("{:?}", e);
                eprintln!("⚠️  {}", e.user_friendly_message());
                return;
            }

            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                severity
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(severity.exit_code());
        }
    }
}
