//! Persistent inventory store.
//!
//! The entire inventory lives in one JSON file, an array of
//! `{"denomination": <face value>, "count": <n>}` records. Reads and writes
//! are whole-file; `save` goes through a sibling temporary file and a rename
//! so a crash mid-write leaves either the old inventory or the new one,
//! never a truncated record.

use crate::error::{Result, StoreError};
use crate::inventory::{BanknoteStack, Inventory};
use log::{debug, info};
use rand::Rng;
use std::fs;
use std::path::Path;

/// Conventional store file name, resolved against the working directory.
pub const DEFAULT_STORE_PATH: &str = "data.json";

/// Loads the inventory from `path`, or creates a fresh one.
///
/// A readable file is parsed strictly: malformed JSON, an unsupported face
/// value, or a denomination listed twice is a [`StoreError::Corrupt`] — the
/// file is left in place, never regenerated over. Denominations absent from
/// the file get count 0.
///
/// If no file exists, each denomination is stocked with a count drawn
/// uniformly from `[1, 49]` using the supplied randomness source, and the
/// fresh inventory is saved immediately.
pub fn load<R: Rng>(path: &Path, rng: &mut R) -> Result<Inventory> {
    if !path.exists() {
        let inventory = Inventory::random(rng);
        info!(
            "no store at {}, generated a fresh inventory worth {} u",
            path.display(),
            inventory.total_value()
        );
        save(&inventory, path)?;
        return Ok(inventory);
    }

    let contents = fs::read_to_string(path)?;
    let stacks: Vec<BanknoteStack> = serde_json::from_str(&contents)
        .map_err(|e| StoreError::corrupt(e.to_string()).with_path(path))?;
    let inventory = Inventory::from_stacks(&stacks).map_err(|e| e.with_path(path))?;

    debug!(
        "loaded {} banknotes worth {} u from {}",
        inventory.total_count(),
        inventory.total_value(),
        path.display()
    );
    Ok(inventory)
}

/// Writes the full inventory to `path`, replacing any previous contents.
///
/// All eight denominations are written, zero counts included. The write
/// lands in `<path>.tmp` first and is renamed over the target, so readers
/// only ever observe a complete inventory.
pub fn save(inventory: &Inventory, path: &Path) -> Result<()> {
    let stacks: Vec<BanknoteStack> = inventory.stacks().collect();
    let json = serde_json::to_string_pretty(&stacks)
        .map_err(|e| StoreError::corrupt(e.to_string()))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    debug!("saved inventory to {}", path.display());
    Ok(())
}
