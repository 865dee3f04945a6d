use clap::Parser;
use session_desk::config::config_manager::ConfigManager;
use session_desk::errors::ErrorHandler;
use session_desk::structs::cli::Cli;
use session_desk::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = ConfigManager::log_level(cli.config.as_deref());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut runner = CommandRunner::new(cli.config, cli.email);
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
    Ok(())
}
