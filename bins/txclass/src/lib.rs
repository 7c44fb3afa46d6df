//! Library side of the `txclass` binary.

pub mod cmd;
pub mod logging;
