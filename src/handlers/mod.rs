//! Command Handlers module
//!
//! Handlers that turn commands from the command loop into domain calls.

mod bank_handler;
mod commands;

#[cfg(test)]
mod tests;

pub use bank_handler::BankHandler;
pub use commands::*;
