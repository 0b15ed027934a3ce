//! Account entity.

use domain::{finite, not_blank, validate_fields, DomainError, DomainResult, Identified};
use domain::DEFAULT_WITHDRAWAL_CEILING;
use validator::Validate;

/// Bank account with a balance and a fixed per-withdrawal ceiling.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Account {
    #[validate(custom(function = "not_blank"))]
    number: String,
    #[validate(custom(function = "finite"), range(min = 0.0, message = "must be >= 0"))]
    balance: f64,
    ceiling: f64,
}

impl Account {
    /// Open an account with the default withdrawal ceiling.
    ///
    /// # Errors
    /// `InvalidArgument` if the number is blank or the balance is negative or not a number.
    pub fn new(number: impl Into<String>, initial_balance: f64) -> DomainResult<Self> {
        Self::with_ceiling(number, initial_balance, DEFAULT_WITHDRAWAL_CEILING)
    }

    /// Open an account with a custom withdrawal ceiling
    pub fn with_ceiling(
        number: impl Into<String>,
        initial_balance: f64,
        ceiling: f64,
    ) -> DomainResult<Self> {
        if !ceiling.is_finite() || ceiling <= 0.0 {
            return Err(DomainError::invalid_argument(
                "withdrawal ceiling must be a positive number",
            ));
        }

        let account = Self {
            number: number.into().trim().to_string(),
            balance: initial_balance,
            ceiling,
        };
        validate_fields(&account)?;
        Ok(account)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Withdraw `amount` from the balance.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// well-formed amount, per-withdrawal ceiling (inclusive), available balance.
    /// The balance is only touched once every check has passed.
    pub fn withdraw(&mut self, amount: f64) -> DomainResult<()> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_argument(
                "withdrawal amount must be a number",
            ));
        }
        if amount <= 0.0 {
            return Err(DomainError::invalid_argument("withdrawal amount must be > 0"));
        }
        if amount > self.ceiling {
            return Err(DomainError::limit_exceeded(format!(
                "withdrawal of {} exceeds the per-withdrawal limit of {}",
                amount, self.ceiling
            )));
        }
        if amount > self.balance {
            return Err(DomainError::insufficient_capacity(format!(
                "insufficient balance: requested {}, available {}",
                amount, self.balance
            )));
        }

        self.balance -= amount;
        tracing::debug!(account = %self.number, amount, balance = self.balance, "Withdrawal applied");
        Ok(())
    }
}

impl Identified for Account {
    const LABEL: &'static str = "account";

    fn id(&self) -> &str {
        &self.number
    }
}
