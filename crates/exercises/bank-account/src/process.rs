//! Withdrawal orchestration.

use std::io::Write;

use common::{emit, Finally};
use domain::{DomainError, ErrorKind};

use crate::bank::Bank;

/// Withdraw from an account in `bank` and report the outcome to `out`.
///
/// Prints one outcome line, then `Withdrawal process finished.` on every exit path.
pub fn process_withdrawal<W: Write>(bank: &mut Bank, number: &str, amount: f64, out: &mut W) {
    let mut out = Finally::new(out, |out: &mut &mut W| {
        emit(out, "Withdrawal process finished.");
    });

    let result = bank.find_account_mut(number).and_then(|account| {
        account.withdraw(amount)?;
        Ok(account.balance())
    });

    match result {
        Ok(balance) => {
            tracing::info!(account = number, amount, balance, "Withdrawal succeeded");
            emit(
                &mut *out,
                format_args!("Withdrawal succeeded ({number}): {amount} withdrawn, balance {balance}"),
            );
        }
        Err(err) => {
            tracing::warn!(account = number, code = err.kind().code(), error = %err, "Withdrawal failed");
            emit(
                &mut *out,
                format_args!("Withdrawal failed ({number}) [{}]: {err}", failure_reason(&err)),
            );
        }
    }
}

fn failure_reason(err: &DomainError) -> &'static str {
    match err.kind() {
        ErrorKind::NotFound => "unknown account",
        ErrorKind::InvalidArgument => "invalid amount",
        ErrorKind::LimitExceeded => "limit exceeded",
        ErrorKind::InsufficientCapacity => "insufficient balance",
        _ => "unexpected error",
    }
}
