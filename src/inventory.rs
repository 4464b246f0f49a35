//! Banknote inventory model.
//!
//! The inventory is a dense per-denomination count array, so "exactly the
//! canonical set of denominations, each at most once" holds by construction.

use crate::denomination::Denomination;
use crate::error::StoreError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A number of banknotes of a single denomination.
///
/// This is also the persisted record shape: the store file is a JSON array
/// of these, with the denomination written as its integer face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanknoteStack {
    /// Face value of every banknote in the stack.
    pub denomination: Denomination,

    /// How many banknotes the stack holds.
    pub count: u32,
}

impl BanknoteStack {
    /// Total value of the stack: `denomination × count`.
    pub fn value(&self) -> u64 {
        u64::from(self.denomination.value()) * u64::from(self.count)
    }
}

/// The complete current holding of the terminal, one count per denomination.
///
/// Mutated only by a successful dispensation; every failure path leaves it
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    counts: [u32; Denomination::COUNT],
}

impl Inventory {
    /// An inventory with every count at zero.
    pub fn empty() -> Self {
        Inventory {
            counts: [0; Denomination::COUNT],
        }
    }

    /// Builds an inventory from a list of stacks, as read from the store.
    ///
    /// Denominations absent from the list get count 0. A denomination that
    /// appears twice is corruption, not a merge.
    pub fn from_stacks(stacks: &[BanknoteStack]) -> Result<Self, StoreError> {
        let mut inventory = Inventory::empty();
        let mut seen = [false; Denomination::COUNT];

        for stack in stacks {
            let idx = stack.denomination.ordinal();
            if seen[idx] {
                return Err(StoreError::corrupt(format!(
                    "denomination {} listed more than once",
                    stack.denomination
                )));
            }
            seen[idx] = true;
            inventory.counts[idx] = stack.count;
        }

        Ok(inventory)
    }

    /// Generates a fresh inventory with every count drawn uniformly
    /// from `[1, 49]`.
    ///
    /// The randomness source is injected so tests can seed it.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut inventory = Inventory::empty();
        for d in Denomination::ALL {
            inventory.counts[d.ordinal()] = rng.gen_range(1..=49);
        }
        inventory
    }

    /// Banknotes held of the given denomination.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.ordinal()]
    }

    /// Sets the count for a denomination.
    pub fn set_count(&mut self, denomination: Denomination, count: u32) {
        self.counts[denomination.ordinal()] = count;
    }

    /// Removes `count` banknotes of the given denomination.
    ///
    /// Callers must have checked availability; the dispenser only removes
    /// what a finished plan already reserved.
    pub(crate) fn remove(&mut self, denomination: Denomination, count: u32) {
        let idx = denomination.ordinal();
        debug_assert!(self.counts[idx] >= count);
        self.counts[idx] -= count;
    }

    /// Total number of banknotes across all denominations.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Total value of all banknotes, in currency units.
    pub fn total_value(&self) -> u64 {
        Denomination::ALL
            .into_iter()
            .map(|d| u64::from(d.value()) * u64::from(self.count(d)))
            .sum()
    }

    /// All eight stacks in ascending denomination order, including empty ones.
    pub fn stacks(&self) -> impl Iterator<Item = BanknoteStack> + '_ {
        Denomination::ALL.into_iter().map(|denomination| BanknoteStack {
            denomination,
            count: self.count(denomination),
        })
    }
}
