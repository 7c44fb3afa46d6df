use clap::Parser;
use eyre::Result;
use txclass_cli::{cmd::MainCmd, logging};

fn main() -> Result<()> {
    let cmd = MainCmd::parse();
    logging::init(cmd.verbose());
    cmd.run()?;
    Ok(())
}
