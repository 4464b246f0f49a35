//! Greedy banknote selection.
//!
//! `dispense` is a pure function over `(inventory, amount)`: it touches no
//! I/O and holds no hidden state, so the same inputs always produce the same
//! plan. Persisting the mutated inventory is the caller's job.

use crate::denomination::Denomination;
use crate::error::DispenseError;
use crate::inventory::{BanknoteStack, Inventory};
use log::debug;
use std::fmt;

/// The banknotes handed out for one request.
///
/// Stacks are ordered by denomination descending, every count is positive,
/// and the stack values sum to the requested amount exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispensationPlan {
    stacks: Vec<BanknoteStack>,
}

impl DispensationPlan {
    /// The plan's stacks, largest denomination first.
    pub fn stacks(&self) -> &[BanknoteStack] {
        &self.stacks
    }

    /// Total value of the plan, in currency units.
    pub fn total(&self) -> u64 {
        self.stacks.iter().map(BanknoteStack::value).sum()
    }

    /// Total number of banknotes handed out.
    pub fn banknote_count(&self) -> u64 {
        self.stacks.iter().map(|s| u64::from(s.count)).sum()
    }
}

impl fmt::Display for DispensationPlan {
    /// One line per stack: `<count>×<denomination> = <subtotal> u`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, stack) in self.stacks.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}×{} = {} u",
                stack.count,
                stack.denomination,
                stack.value()
            )?;
        }
        Ok(())
    }
}

/// Selects banknotes summing exactly to `amount` and removes them from the
/// inventory.
///
/// The policy is greedy descent: take as many banknotes as possible from the
/// largest denomination not exceeding the remaining amount, then move to the
/// next smaller one. With the canonical denomination set this reaches every
/// representable amount when the inventory is plentiful, but a skewed
/// inventory can make it fail where a smarter selection would succeed; that
/// trade-off is deliberate.
///
/// On any error the inventory is left exactly as it was.
pub fn dispense(
    inventory: &mut Inventory,
    amount: u32,
) -> Result<DispensationPlan, DispenseError> {
    if amount == 0 {
        return Err(DispenseError::InvalidRequest);
    }
    if inventory.total_value() < u64::from(amount) {
        return Err(DispenseError::InsufficientFunds);
    }

    let mut remaining = amount;
    let mut stacks = Vec::new();

    for denomination in Denomination::DESCENDING {
        let face = denomination.value();
        if face > remaining {
            continue;
        }

        let need = remaining / face;
        let take = need.min(inventory.count(denomination));
        if take > 0 {
            stacks.push(BanknoteStack {
                denomination,
                count: take,
            });
            remaining -= take * face;
        }
        if remaining == 0 {
            break;
        }
    }

    if remaining != 0 {
        debug!(
            "greedy selection fell short of {} by {} with total value {}",
            amount,
            remaining,
            inventory.total_value()
        );
        return Err(DispenseError::CannotMakeChange);
    }

    // The plan is complete; only now does the inventory change.
    for stack in &stacks {
        inventory.remove(stack.denomination, stack.count);
    }

    Ok(DispensationPlan { stacks })
}
