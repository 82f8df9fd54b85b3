use clap::{Parser, Subcommand};
use swarm_utils::{config::Config, disk_storage::DiskStorageInterface};

#[derive(Parser, Debug)]
#[clap(version, subcommand_required = false, arg_required_else_help = false)]
#[command(name = "swarm", bin_name = "swarm", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of the config file
    Config,
}

pub fn print_config_path() -> swarm_tui::Result<()> {
    let path = Config::path().map_err(swarm_tui::Error::from)?;
    println!("{}", path.display());
    Ok(())
}
