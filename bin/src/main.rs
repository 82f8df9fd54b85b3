use clap::Parser;

mod cli;
mod panic_hook;

#[tokio::main]
async fn main() -> swarm_tui::Result<()> {
    let cli = cli::Cli::parse();
    panic_hook::set();

    match cli.cmd {
        Some(cli::Commands::Config) => {
            cli::print_config_path()?;
        }
        None => {
            swarm_tui::run().await?;
        }
    }

    Ok(())
}
