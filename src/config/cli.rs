use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::core::registration::FormData;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-widgets")]
#[command(about = "A calculator and a registration form, driven from the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print the final state as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Press calculator keys in order; without keys, read them from stdin
    Calc {
        #[arg(allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Fill in the registration form and submit it
    Signup(SignupArgs),
    /// Show one of the navigation pages
    Page {
        #[arg(default_value = "/")]
        path: String,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct SignupArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub confirm_password: String,

    /// Show errors for every field, including ones left empty
    #[arg(long)]
    pub touch_all: bool,

    /// Validate only, do not submit
    #[arg(long)]
    pub dry_run: bool,
}

impl SignupArgs {
    pub fn form_data(&self) -> FormData {
        FormData {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}
