//! Bank - account registry.

use domain::{DomainResult, Registry};

use crate::account::Account;

/// Accounts keyed by account number.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Registry<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account; fails with `DuplicateKey` if the number is taken
    pub fn add_account(&mut self, account: Account) -> DomainResult<()> {
        let number = account.number().to_string();
        self.accounts.add(account)?;
        tracing::debug!(account = %number, "Account registered");
        Ok(())
    }

    /// Look up an account; fails with `NotFound` for unknown numbers
    pub fn find_account(&self, number: &str) -> DomainResult<&Account> {
        self.accounts.find(number)
    }

    /// Look up the stored account for mutation
    pub fn find_account_mut(&mut self, number: &str) -> DomainResult<&mut Account> {
        self.accounts.find_mut(number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
