//! `sniff` subcommand.

use clap::Parser;
use txclass::{sniff::FromHexError, sniff_hex, TypeTag};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error("empty transaction")]
    Empty,
}

/// Prints the envelope type of a raw transaction.
///
/// Only the first byte is inspected, the rest of the encoding is not validated.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded transaction, `0x` prefix optional
    #[arg(required = true)]
    tx: String,
}

impl Cmd {
    /// Runs `sniff` command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", sniff_input(&self.tx)?);
        Ok(())
    }
}

/// Decodes `input` and sniffs its type.
pub fn sniff_input(input: &str) -> Result<TypeTag, Error> {
    sniff_hex(input)?.ok_or(Error::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_raw() {
        assert_eq!(sniff_input("0xf86c0a85").unwrap().to_string(), "0x0");
        assert_eq!(sniff_input("02f8").unwrap().to_string(), "0x2");
        assert!(matches!(sniff_input("0x"), Err(Error::Empty)));
        assert!(matches!(sniff_input("0xg0"), Err(Error::InvalidHex(_))));
    }
}
