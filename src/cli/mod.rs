//! Command-line interface.

pub mod compare;
pub mod completions;
pub mod copy;
pub mod envs;
pub mod history;
pub mod init;
pub mod output;
pub mod resolve;
pub mod secrets;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vaultsync - compare and promote secrets across environments.
#[derive(Parser)]
#[command(
    name = "vaultsync",
    about = "Compare, copy and restore secrets across environments",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to the configuration file (default: .vaultsync.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a configuration with prod, staging and dev environments
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// List configured environments
    Envs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List secret names in an environment
    List {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a secret's current value
    Get {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
    },

    /// Create or overwrite a secret
    Set {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
        /// Secret value
        value: String,
    },

    /// Delete a secret (its history is kept)
    Rm {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
    },

    /// Compare the secret names of two environments
    Compare {
        /// Source environment id
        source: String,
        /// Target environment id
        target: String,
        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Write a JSON report, optionally to PATH
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Copy secrets from one environment to another
    Copy {
        /// Source environment id
        source: String,
        /// Target environment id
        target: String,
        /// Secret names to copy
        names: Vec<String>,
        /// Copy every secret present in the source
        #[arg(short, long, conflicts_with = "names")]
        all: bool,
        /// Select every source secret containing this text (case-insensitive)
        #[arg(short, long, conflicts_with = "names")]
        filter: Option<String>,
        /// Prompt for a new value for each secret before writing
        #[arg(short, long)]
        edit: bool,
        /// Override the copied value of one secret (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect and restore secret versions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryAction {
    /// List versions, newest first
    List {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one version, including its value
    Show {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
        /// Version id
        version: String,
    },

    /// Make a previous version current again
    Restore {
        /// Environment id
        #[arg(short, long)]
        env: String,
        /// Secret name
        name: String,
        /// Version id
        version: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute a command.
pub async fn execute(command: Command, config: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let config_path = resolve::config_path(config);

    match command {
        Init { force } => init::execute(&config_path, force),
        Envs { json } => envs::execute(&config_path, json),
        List { env, json } => secrets::list(&config_path, &env, json).await,
        Get { env, name } => secrets::get(&config_path, &env, &name).await,
        Set { env, name, value } => secrets::set(&config_path, &env, &name, &value).await,
        Rm { env, name } => secrets::rm(&config_path, &env, &name).await,
        Compare {
            source,
            target,
            filter,
            json,
            export,
        } => {
            let options = compare::Options {
                filter,
                json,
                export,
            };
            compare::execute(&config_path, &source, &target, options).await
        }
        Copy {
            source,
            target,
            names,
            all,
            filter,
            edit,
            set,
            yes,
            json,
        } => {
            let options = copy::Options {
                names,
                all,
                filter,
                edit,
                set,
                yes,
                json,
            };
            copy::execute(&config_path, &source, &target, options).await
        }
        History { action } => match action {
            HistoryAction::List { env, name, json } => {
                history::list(&config_path, &env, &name, json).await
            }
            HistoryAction::Show { env, name, version } => {
                history::show(&config_path, &env, &name, &version).await
            }
            HistoryAction::Restore {
                env,
                name,
                version,
                yes,
            } => history::restore(&config_path, &env, &name, &version, yes).await,
        },
        Completions { shell } => completions::execute(shell),
    }
}
