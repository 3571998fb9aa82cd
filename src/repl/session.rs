//! Command loop session
//!
//! Reads menu codes and their inputs line by line, runs them through the
//! `BankHandler` and writes the outcome. Domain and input errors are printed
//! and the loop continues; only I/O failures end the session early.

use std::io::{BufRead, Write};
use uuid::Uuid;

use crate::domain::{DomainError, OperationContext};
use crate::error::{AppError, AppResult};
use crate::handlers::{
    BankHandler, CreateAccountCommand, CreateCustomerCommand, ListAccountsQuery, StatementQuery,
    TransactionCommand,
};

use super::{Operation, MENU};

/// What the loop does after a command
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Message(String),
    Exit,
}

/// Interactive session over any line reader and writer
pub struct Session<R, W> {
    handler: BankHandler,
    input: R,
    output: W,
    session_id: Uuid,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(handler: BankHandler, input: R, output: W) -> Self {
        Self {
            handler,
            input,
            output,
            session_id: Uuid::new_v4(),
        }
    }

    /// Run until the exit command or the end of input
    pub fn run(&mut self) -> AppResult<()> {
        tracing::info!(session_id = %self.session_id, "Session started");

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let code = match self.read_field("Choose an operation") {
                Ok(code) => code,
                Err(AppError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let mut context =
                OperationContext::new(self.session_id).with_operation(code.to_uppercase());
            let correlation_id = context.ensure_correlation_id();
            let span = tracing::info_span!("command", operation = %code, %correlation_id);
            let _guard = span.enter();

            match code.parse::<Operation>().and_then(|op| self.dispatch(op)) {
                Ok(Reply::Message(message)) => writeln!(self.output, "{}", message)?,
                Ok(Reply::Exit) => break,
                Err(AppError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error_code = e.error_code(), "Command failed: {}", e);
                    writeln!(self.output, "Operation failed! {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        tracing::info!(session_id = %self.session_id, "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, operation: Operation) -> AppResult<Reply> {
        tracing::debug!(%operation, "Dispatching");

        let reply = match operation {
            Operation::Deposit => {
                let command = self.read_transaction("deposit")?;
                let result = self.handler.deposit(command)?;
                format!(
                    "Deposit of {:.2} completed. Balance: {:.2}",
                    result.amount, result.balance
                )
            }
            Operation::Withdraw => {
                let command = self.read_transaction("withdrawal")?;
                let result = self.handler.withdraw(command)?;
                format!(
                    "Withdrawal of {:.2} completed. Balance: {:.2}",
                    result.amount, result.balance
                )
            }
            Operation::Statement => {
                let query = self.read_account_ref()?;
                self.handler.statement(query)?.render()
            }
            Operation::ExportStatement => {
                let query = self.read_account_ref()?;
                self.handler.statement(query)?.to_json()?
            }
            Operation::CreateCustomer => {
                let name = self.read_field("Customer name")?;
                let birth_date = self.read_field("Birth date (DD/MM/YYYY)")?;
                let tax_id = self.read_field("Tax id")?;
                let address = self.read_field("Address")?;
                self.handler.create_customer(CreateCustomerCommand::new(
                    name, birth_date, tax_id, address,
                ))?;
                "Customer created successfully!".to_string()
            }
            Operation::CreateAccount => {
                let tax_id = self.read_customer()?;
                let number = self.read_field("Account number")?;
                let account = self
                    .handler
                    .create_account(CreateAccountCommand::new(tax_id, number))?;
                format!("Account created successfully!\n{}", account)
            }
            Operation::ListAccounts => {
                let tax_id = self.read_customer()?;
                let numbers = self.handler.list_accounts(ListAccountsQuery::new(tax_id))?;
                if numbers.is_empty() {
                    "No accounts found.".to_string()
                } else {
                    numbers
                        .iter()
                        .map(|n| format!("Account: {}", n))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Operation::Exit => return Ok(Reply::Exit),
        };

        Ok(Reply::Message(reply))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Prompt for a tax id and fail early if nobody has it
    fn read_customer(&mut self) -> AppResult<String> {
        let tax_id = self.read_field("Customer tax id")?;
        self.handler.directory().require(&tax_id)?;
        Ok(tax_id)
    }

    /// Prompt for a known tax id, then an account number
    fn read_account_ref(&mut self) -> AppResult<StatementQuery> {
        let tax_id = self.read_customer()?;
        let number = self.read_field("Account number")?;
        Ok(StatementQuery::new(tax_id, number))
    }

    /// Prompt for a known tax id, then one of that customer's accounts
    fn read_transaction(&mut self, label: &str) -> AppResult<TransactionCommand> {
        let tax_id = self.read_field("Customer tax id")?;
        let customer = self.handler.directory().require(&tax_id)?;

        let account_number = prompt_line(&mut self.input, &mut self.output, "Account number")?;
        if customer.account(&account_number).is_none() {
            return Err(DomainError::AccountNotFound(account_number).into());
        }

        let amount = self.read_field(&format!("Amount of the {}", label))?;
        Ok(TransactionCommand::new(tax_id, account_number, amount))
    }

    fn read_field(&mut self, prompt: &str) -> AppResult<String> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    /// Consume the session, returning the handler and the writer
    pub fn into_parts(self) -> (BankHandler, W) {
        (self.handler, self.output)
    }
}

/// Write `prompt`, then read one trimmed line
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<String> {
    write!(output, "{}: ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::EndOfInput);
    }
    Ok(line.trim().to_string())
}
