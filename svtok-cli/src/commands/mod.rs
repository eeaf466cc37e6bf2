//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text files and group the tokens into sentences
    Process(process::ProcessArgs),

    /// Validate an abbreviation table file
    Validate(validate::ValidateArgs),

    /// Generate an abbreviation table template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in Swedish abbreviations
    Abbreviations,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}
