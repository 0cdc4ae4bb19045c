pub mod commands;
pub mod output;

use crate::config;
use crate::errors::Result;
use crate::prompt::TerminalInput;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{Kitchen, RemoveTarget};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keki")]
#[command(about = "Keki: Stack the cake, bake it, eat it.")]
#[command(version)]
pub struct Cli {
    /// Defaults to `list`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding settings.json and the cakes (defaults to the platform data directory)
    #[arg(long, global = true, env = "KEKI_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all layers in the cake
    List,

    /// Add a layer onto the cake
    Push {
        /// Name of the layer (asked for when omitted)
        layer: Option<String>,
    },

    /// Eat the top layer of the cake
    Pop,

    /// Eat the cake
    #[command(visible_alias = "eat")]
    Clear,

    /// Manage cakes in the bakery
    Cake {
        /// Defaults to `list`
        #[command(subcommand)]
        action: Option<CakeAction>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum CakeAction {
    /// Set the current cake
    Set {
        /// Name of the cake (asked for when omitted)
        name: Option<String>,
    },

    /// List all cakes in the bakery
    List,

    /// Remove a cake from the bakery
    Remove {
        /// Name of the cake (asked for when omitted)
        name: Option<String>,

        /// Remove all cakes
        #[arg(long, conflicts_with_all = ["name", "current"])]
        all: bool,

        /// Remove current cake
        #[arg(long, conflicts_with = "name")]
        current: bool,
    },
}

/// Commands that read or write the bakery
enum BakeryCommand {
    List,
    Push(Option<String>),
    Pop,
    Clear,
    Cake(CakeAction),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        if self.no_color {
            console::set_colors_enabled(false);
        }

        let command = match self.command.unwrap_or(Commands::List) {
            Commands::Completions { shell } => {
                return commands::completions::generate_completions(shell);
            }
            Commands::List => BakeryCommand::List,
            Commands::Push { layer } => BakeryCommand::Push(layer),
            Commands::Pop => BakeryCommand::Pop,
            Commands::Clear => BakeryCommand::Clear,
            Commands::Cake { action } => BakeryCommand::Cake(action.unwrap_or(CakeAction::List)),
        };

        let data_dir = match self.home {
            Some(home) => home,
            None => config::get_data_dir()?,
        };
        let input = TerminalInput;
        let mut kitchen = Kitchen::open(&data_dir, &input)?;

        match command {
            BakeryCommand::List => commands::layer::list(&kitchen),
            BakeryCommand::Push(layer) => commands::layer::push(&kitchen, layer),
            BakeryCommand::Pop => commands::layer::pop(&kitchen),
            BakeryCommand::Clear => commands::layer::clear(&kitchen),
            BakeryCommand::Cake(CakeAction::Set { name }) => commands::cake::set(&mut kitchen, name),
            BakeryCommand::Cake(CakeAction::List) => commands::cake::list(&kitchen),
            BakeryCommand::Cake(CakeAction::Remove { name, all, current }) => {
                commands::cake::remove(&kitchen, RemoveTarget::from_args(name, all, current))
            }
        }
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        if self.no_color {
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
