//! Handler tests
//!
//! Exercise the handler end to end over an in-memory directory.

#[cfg(test)]
mod tests {
    use crate::aggregate::WithdrawalPolicy;
    use crate::domain::{DomainError, TransactionKind};
    use crate::error::AppError;
    use crate::handlers::{
        BankHandler, CreateAccountCommand, CreateCustomerCommand, ListAccountsQuery,
        StatementQuery, TransactionCommand,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn handler_with_account() -> BankHandler {
        let mut handler = BankHandler::default();
        handler
            .create_customer(CreateCustomerCommand::new("Ana", "01/02/1990", "111", "Rua A"))
            .unwrap();
        handler
            .create_account(CreateAccountCommand::new("111", "1"))
            .unwrap();
        handler
    }

    fn balance(handler: &BankHandler) -> Decimal {
        handler
            .statement(StatementQuery::new("111", "1"))
            .unwrap()
            .balance
    }

    fn deposit(handler: &mut BankHandler, amount: &str) -> Result<Decimal, AppError> {
        handler
            .deposit(TransactionCommand::new("111", "1", amount))
            .map(|r| r.balance)
    }

    fn withdraw(handler: &mut BankHandler, amount: &str) -> Result<Decimal, AppError> {
        handler
            .withdraw(TransactionCommand::new("111", "1", amount))
            .map(|r| r.balance)
    }

    // =========================================================================
    // Full session scenario
    // =========================================================================

    #[test]
    fn test_checking_account_scenario() {
        let mut handler = handler_with_account();

        assert_eq!(deposit(&mut handler, "1000").unwrap(), dec!(1000));
        let statement = handler.statement(StatementQuery::new("111", "1")).unwrap();
        assert_eq!(statement.lines.len(), 2);
        assert!(statement
            .lines
            .iter()
            .all(|l| l.kind == TransactionKind::Deposit && l.amount == dec!(1000)));

        assert_eq!(withdraw(&mut handler, "500").unwrap(), dec!(500));
        assert_eq!(withdraw(&mut handler, "500").unwrap(), dec!(0));

        match withdraw(&mut handler, "1") {
            Err(AppError::Domain(DomainError::InsufficientFunds { .. })) => {}
            other => panic!("Expected InsufficientFunds, got: {:?}", other),
        }

        assert_eq!(deposit(&mut handler, "1000").unwrap(), dec!(1000));
        assert_eq!(withdraw(&mut handler, "500").unwrap(), dec!(500));

        match withdraw(&mut handler, "1") {
            Err(AppError::Domain(DomainError::WithdrawalCountExceeded { limit: 3 })) => {}
            other => panic!("Expected WithdrawalCountExceeded, got: {:?}", other),
        }
        assert_eq!(balance(&handler), dec!(500));

        // 2 deposits and 3 withdrawals, each recorded twice
        let statement = handler.statement(StatementQuery::new("111", "1")).unwrap();
        assert_eq!(statement.lines.len(), 10);
    }

    // =========================================================================
    // Input and lookup errors
    // =========================================================================

    #[test]
    fn test_non_numeric_amount_is_reported() {
        let mut handler = handler_with_account();

        let result = deposit(&mut handler, "abc");
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        assert_eq!(balance(&handler), Decimal::ZERO);
    }

    #[test]
    fn test_negative_deposit_rejected() {
        let mut handler = handler_with_account();

        let result = deposit(&mut handler, "-10");
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidAmount(_)))
        ));
        let statement = handler.statement(StatementQuery::new("111", "1")).unwrap();
        assert!(statement.lines.is_empty());
    }

    #[test]
    fn test_withdraw_over_limit() {
        let mut handler = handler_with_account();
        deposit(&mut handler, "2000").unwrap();

        let result = withdraw(&mut handler, "501");
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::LimitExceeded { .. }))
        ));
        assert_eq!(balance(&handler), dec!(2000));
    }

    #[test]
    fn test_unknown_customer_and_account() {
        let mut handler = handler_with_account();

        let result = handler.deposit(TransactionCommand::new("999", "1", "10"));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::CustomerNotFound(_)))
        ));

        let result = handler.withdraw(TransactionCommand::new("111", "9", "10"));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::AccountNotFound(_)))
        ));

        let result = handler.statement(StatementQuery::new("111", "9"));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::AccountNotFound(_)))
        ));
    }

    #[test]
    fn test_list_accounts() {
        let mut handler = BankHandler::default();
        handler
            .create_customer(CreateCustomerCommand::new("Bia", "", "222", ""))
            .unwrap();

        assert!(handler
            .list_accounts(ListAccountsQuery::new("222"))
            .unwrap()
            .is_empty());

        handler.create_account(CreateAccountCommand::new("222", "10")).unwrap();
        handler.create_account(CreateAccountCommand::new("222", "20")).unwrap();
        assert_eq!(
            handler.list_accounts(ListAccountsQuery::new("222")).unwrap(),
            vec!["10".to_string(), "20".to_string()]
        );

        assert!(matches!(
            handler.list_accounts(ListAccountsQuery::new("999")),
            Err(AppError::Domain(DomainError::CustomerNotFound(_)))
        ));
    }

    #[test]
    fn test_configured_policy_applies_to_new_accounts() {
        let mut handler = BankHandler::new(WithdrawalPolicy::checking(dec!(100), 1));
        handler
            .create_customer(CreateCustomerCommand::new("Ana", "", "111", ""))
            .unwrap();
        let account = handler
            .create_account(CreateAccountCommand::new("111", "1"))
            .unwrap();
        assert_eq!(account.policy(), &WithdrawalPolicy::checking(dec!(100), 1));

        deposit(&mut handler, "1000").unwrap();
        assert!(matches!(
            withdraw(&mut handler, "150"),
            Err(AppError::Domain(DomainError::LimitExceeded { .. }))
        ));
        withdraw(&mut handler, "50").unwrap();
        assert!(matches!(
            withdraw(&mut handler, "50"),
            Err(AppError::Domain(DomainError::WithdrawalCountExceeded { limit: 1 }))
        ));
    }

    #[test]
    fn test_duplicate_customer() {
        let mut handler = handler_with_account();
        let result =
            handler.create_customer(CreateCustomerCommand::new("Other", "", "111", ""));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::DuplicateCustomer(_)))
        ));
    }
}
