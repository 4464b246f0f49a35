//! # Cash Dispenser
//!
//! An interactive cash-dispensing terminal. A persistent inventory of
//! banknotes is held in a single JSON file; each request for an amount is
//! answered with a multiset of banknotes summing to it exactly, chosen by
//! greedy descent from the largest denomination downward.
//!
//! ## Design Principles
//!
//! - **Closed denomination set**: eight face values, enforced structurally
//! - **Pure dispensing**: `dispense` touches no I/O and is deterministic
//! - **Atomic persistence**: whole-file writes via temp-file-then-rename
//! - **Crash consistency**: a committed dispensation is never half-visible
//!
//! ## Example
//!
//! ```
//! use cash_dispenser::{dispense, Denomination, Inventory};
//!
//! let mut inventory = Inventory::empty();
//! inventory.set_count(Denomination::Thousand, 1);
//! inventory.set_count(Denomination::Hundred, 5);
//!
//! let plan = dispense(&mut inventory, 1400).unwrap();
//! assert_eq!(plan.total(), 1400);
//! assert_eq!(inventory.count(Denomination::Hundred), 1);
//! ```

pub mod denomination;
pub mod dispenser;
pub mod error;
pub mod inventory;
pub mod store;

pub use denomination::{Denomination, UnknownDenomination};
pub use dispenser::{dispense, DispensationPlan};
pub use error::{DispenseError, Result, StoreError};
pub use inventory::{BanknoteStack, Inventory};
