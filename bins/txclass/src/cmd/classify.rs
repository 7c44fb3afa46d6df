//! `classify` subcommand.

use clap::Parser;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::debug;
use txclass::{classify_detailed, CommonConfig, IncompatibleFieldsError, Outcome, TransactionFields};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    IncompatibleFields(#[from] IncompatibleFieldsError),
}

/// Classifies a transaction request given as JSON.
///
/// Prints the type tag, or `indeterminate` when it can't be decided.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path to the JSON transaction request. Reads stdin when omitted or `-`.
    path: Option<PathBuf>,
    /// Hardfork of the network, used when the request doesn't name one
    #[arg(long)]
    hardfork: Option<String>,
    /// Path to a JSON chain configuration, e.g. `{"chainId": 1, "hardfork": "london"}`
    #[arg(long, conflicts_with = "hardfork")]
    config: Option<PathBuf>,
    /// Also print the rule that decided the type
    #[arg(long)]
    explain: bool,
}

impl Cmd {
    /// Runs `classify` command.
    pub fn run(&self) -> Result<(), Error> {
        let input = match self.path.as_deref() {
            Some(path) if path != Path::new("-") => read_file(path)?,
            _ => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|source| Error::Read {
                        path: "stdin".into(),
                        source,
                    })?;
                input
            }
        };

        let config = match &self.config {
            Some(path) => parse_json(&read_file(path)?, path)?,
            None => CommonConfig {
                chain_id: None,
                hardfork: self.hardfork.clone(),
            },
        };
        debug!(chain_id = ?config.chain_id, hardfork = ?config.hardfork, "network context");

        let outcome = classify_input(&input, &config)?;
        match outcome.tag {
            Some(tag) => print!("{tag}"),
            None => print!("indeterminate"),
        }
        if self.explain {
            print!(" ({})", outcome.rule);
        }
        println!();
        Ok(())
    }
}

/// Parses `input` as a transaction request and classifies it.
pub fn classify_input(input: &str, config: &CommonConfig) -> Result<Outcome, Error> {
    let fields: TransactionFields = parse_json(input, Path::new("input"))?;
    Ok(classify_detailed(&fields, config)?)
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.display().to_string(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(input: &str, path: &Path) -> Result<T, Error> {
    serde_json::from_str(input).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })
}
