mod cli;
mod config;
mod database;
mod error;
mod greeter;
mod handler;
mod irc;
mod mask;
#[cfg(test)]
mod test_helpers;
mod validate;

use std::error::Error;

use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{generate_example_config, Cli, Command};
use crate::config::Config;
use crate::database::{Database, RecordStore};
use crate::error::GreeterResult;
use crate::greeter::GreetingStore;
use crate::handler::Greeter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Handle config generation
    if cli.generate_config {
        println!("{}", generate_example_config());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hostgreeter={}", log_level)));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .init();

    let config = if cli.config.exists() {
        Config::load(&cli.config).map_err(|e| {
            error!("Failed to load configuration from {:?}: {}", cli.config, e);
            e
        })?
    } else {
        debug!("No configuration at {:?}, using defaults", cli.config);
        Config::default()
    };

    let database = Database::open(&config.database.path).map_err(|e| {
        error!("Failed to open greeting database {:?}: {}", config.database.path, e);
        e
    })?;
    let greeter = Greeter::new(
        GreetingStore::new(database, config.greeter.casemapping),
        &config.greeter,
    );

    // Close the store whether or not the command succeeded
    let result = run(&greeter, command).await;
    let closed = greeter.close().await;
    result?;
    closed?;

    Ok(())
}

async fn run<S: RecordStore>(greeter: &Greeter<S>, command: Command) -> GreeterResult<()> {
    match command {
        Command::Add { channel, hostmask, greeting } => {
            let reply = greeter.cmd_add(&channel, &hostmask, &greeting.join(" ")).await?;
            println!("{}", reply);
        }
        Command::Remove { channel, hostmask } => {
            println!("{}", greeter.cmd_remove(&channel, &hostmask).await?);
        }
        Command::List { channel } => {
            println!("{}", greeter.cmd_list(&channel).await?);
        }
        Command::Get { channel, hostmask } => {
            println!("{}", greeter.cmd_get(&channel, &hostmask).await?);
        }
        Command::Join { channel, identity } => {
            if let Some(greeting) = greeter.on_join(&channel, &identity).await {
                println!("{}", greeting);
            }
        }
        Command::Pipe => pipe(greeter).await?,
    }
    Ok(())
}

async fn pipe<S: RecordStore>(greeter: &Greeter<S>) -> GreeterResult<()> {
    info!("Reading IRC lines from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = greeter.handle_line(&line).await {
            stdout.write_all(format!("{}\r\n", reply).as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    info!("End of input");
    Ok(())
}
