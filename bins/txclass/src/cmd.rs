//! `txclass` subcommands.

pub mod classify;
pub mod sniff;

use clap::{Parser, Subcommand};

/// Ethereum transaction envelope classifier
#[derive(Parser, Debug)]
#[command(name = "txclass", version, infer_subcommands = true)]
pub struct MainCmd {
    /// Log classification decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

/// `txclass` subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a JSON transaction request
    Classify(classify::Cmd),
    /// Read the type of an encoded transaction from its first byte
    Sniff(sniff::Cmd),
}

/// Errors of all subcommands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classification failed
    #[error(transparent)]
    Classify(#[from] classify::Error),
    /// Sniffing failed
    #[error(transparent)]
    Sniff(#[from] sniff::Error),
}

impl MainCmd {
    /// Whether `--verbose` was passed.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match &self.command {
            Command::Classify(cmd) => cmd.run().map_err(Into::into),
            Command::Sniff(cmd) => cmd.run().map_err(Into::into),
        }
    }
}
