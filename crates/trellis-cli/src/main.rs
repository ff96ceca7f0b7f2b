mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TRELLIS_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        output::output_error(&err.to_string());
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(*shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::connect(cli.server, cli.credentials).await?;

    match cli.command {
        Commands::Auth(auth_cmd) => handlers::auth::handle(&ctx, auth_cmd.action).await,
        Commands::Board(board_cmd) => handlers::board::handle(&ctx, board_cmd.action).await,
        Commands::List(list_cmd) => handlers::list::handle(&ctx, list_cmd.action).await,
        Commands::Card(card_cmd) => handlers::card::handle(&ctx, card_cmd.action).await,
        Commands::Invite(invite_cmd) => handlers::invite::handle(&ctx, invite_cmd.action).await,
        // Returned from before the context was built
        Commands::Completions { .. } => Ok(()),
    }
}
