//! Command loop
//!
//! Text menu over stdin/stdout driving the `BankHandler`.

mod operation;
mod session;

pub use operation::{Operation, MENU};
pub use session::Session;
