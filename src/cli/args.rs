// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// TOML file with the notes to load (optional, defaults to the demo notes)
    #[arg(short, long, value_name = "SEED", global = true)]
    pub seed: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find notes whose title is exactly TITLE
    Title {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Find notes whose text contains FRAGMENT
    Text {
        #[arg(value_name = "FRAGMENT")]
        fragment: String,
    },

    /// Find notes tagged with TAG
    Tag {
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Delete every note equal to the given one
    Delete {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "TEXT")]
        text: String,

        /// Tags of the note, in order
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Run the canned query sequence against the loaded notes
    Demo,
}
