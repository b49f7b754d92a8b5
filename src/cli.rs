use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Greet users joining a channel based on their hostmask", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "hostgreeter.toml")]
    pub config: PathBuf,

    /// Generate an example configuration file and exit
    #[arg(short, long)]
    pub generate_config: bool,

    /// Set the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the greeting for a hostmask, replacing any previous one
    Add {
        channel: String,
        hostmask: String,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        greeting: Vec<String>,
    },
    /// Delete the greeting for a hostmask
    Remove { channel: String, hostmask: String },
    /// Show every greeting in a channel
    List { channel: String },
    /// Show the greetings whose hostmask matches the given one
    Get { channel: String, hostmask: String },
    /// Print the greeting a user would get on joining, if any
    Join { channel: String, identity: String },
    /// Read raw IRC lines on stdin and write greeting replies to stdout
    Pipe,
}

pub fn generate_example_config() -> String {
    r#"# hostgreeter example configuration

[database]
path = "greetings.json"   # Greeting database, created on first write

[greeter]
casemapping = "rfc1459"   # rfc1459, ascii or strict (no folding)
prefix_nick = true        # Reply with "nick: greeting"
"#
    .to_string()
}
