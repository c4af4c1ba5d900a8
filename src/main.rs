use calculator::cli::{Cli, commands};
use calculator::{Settings, logging};
use clap::Parser;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });
    logging::init_with_config(&settings.logging);

    let stdout = std::io::stdout();
    match commands::compute::run(&cli, &mut stdout.lock()) {
        Ok(code) => code.into(),
        Err(e) => {
            tracing::error!(target: "cli", "failed to write output: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
