use crate::application::services::ConsoleLauncher;
use crate::application::store::ConfigurationStore;
use crate::domain::entities::MachineProfile;
use crate::infrastructure::config::DEFAULT_CONFIG_PATH;
use crate::infrastructure::output::{print_command, print_profiles};
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// CLI configuration for vconsole
#[derive(Parser, Debug)]
#[command(name = "vconsole", version)]
#[command(about = "vconsole: manage iDRAC machines and open their KVM consoles", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "VCONSOLE_CONFIG", default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured machines
    List,

    /// Add a machine
    Add {
        name: String,
        host: String,
        user: String,
        password: String,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// Remove the first machine with the given name
    Remove { name: String },

    /// Open the remote console of a machine
    Launch {
        name: String,

        /// Print the client command instead of running it
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    pub async fn run(&self, store: &mut ConfigurationStore, launcher: &ConsoleLauncher) -> Result<()> {
        match &self.command {
            Command::List => print_profiles(store.profiles()),
            Command::Add {
                name,
                host,
                user,
                password,
                title,
            } => {
                store.add_profile(MachineProfile::new(
                    name,
                    host,
                    user,
                    password,
                    title.clone(),
                ))?;
                if self.verbose {
                    println!("{}", format!("Added {}", name).cyan());
                }
            }
            Command::Remove { name } => {
                store.remove_profile(name)?;
                if self.verbose {
                    println!("{}", format!("Removed {}", name).cyan());
                }
            }
            Command::Launch { name, dry_run: true } => {
                print_command(&launcher.command_for(store, name)?);
            }
            Command::Launch { name, dry_run: false } => {
                launcher.launch(store, name).await?;
            }
        }

        Ok(())
    }
}
