use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use tilecount::{read_file, survey_tiles};

/// Count map tiles and read files whole
#[derive(Parser, Debug)]
#[command(name = "tilecount", version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count tiles in a {z}/{x}/{y} directory tree
    Count {
        /// Root of the tile tree
        root: PathBuf,

        /// Fail if any directory in the tree could not be read
        #[arg(long)]
        strict: bool,
    },
    /// Read a file into memory
    Read {
        /// File to read
        file: PathBuf,

        /// Write the contents to stdout instead of the size
        #[arg(long)]
        print: bool,
    },
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    debug!("Logging initialized");

    if let Err(e) = run(args.command) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Count { root, strict } => {
            let survey = survey_tiles(&root);
            println!("{}", survey.tiles);
            if strict && !survey.is_complete() {
                bail!(
                    "{} directories under {} could not be read",
                    survey.unreadable.len(),
                    root.display()
                );
            }
        }
        Command::Read { file, print } => {
            let buffer = read_file(&file)?;
            if print {
                io::stdout()
                    .write_all(buffer.contents())
                    .context("Failed to write to stdout")?;
            } else {
                println!("{}", buffer.contents().len());
            }
        }
    }
    Ok(())
}
