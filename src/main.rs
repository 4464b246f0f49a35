//! Cash Dispenser CLI
//!
//! An interactive session against the banknote inventory persisted in
//! `data.json` in the working directory. Amounts are read from standard
//! input, one per line; the session ends on end-of-input.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use cash_dispenser::{dispense, store, Inventory, Result};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = Path::new(store::DEFAULT_STORE_PATH);
    let mut rng = rand::thread_rng();
    let mut inventory = store::load(path, &mut rng)?;

    println!(
        "The machine holds {} banknotes worth {} u in total.",
        inventory.total_count(),
        inventory.total_value()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let amount = match prompt_for_amount(&mut lines)? {
            Some(amount) => amount,
            // End of input: the session is over.
            None => return Ok(()),
        };

        serve_request(&mut inventory, amount, path)?;
    }
}

/// Prompts until a line parses as a positive integer.
///
/// Returns `None` when standard input is exhausted.
fn prompt_for_amount(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<u32>> {
    println!("Enter the amount to withdraw:");
    flush_stdout()?;

    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        match line.trim().parse::<u32>() {
            Ok(amount) if amount > 0 => return Ok(Some(amount)),
            _ => {
                warn!("rejected input line {:?}", line.trim());
                println!("The amount must be a positive number, try again:");
                flush_stdout()?;
            }
        }
    }
}

/// Dispenses one request and persists the result.
///
/// Refusals are reported and recovered; the save completing before the next
/// prompt is what keeps the file in step with the session.
fn serve_request(inventory: &mut Inventory, amount: u32, path: &Path) -> Result<()> {
    match dispense(inventory, amount) {
        Ok(plan) => {
            store::save(inventory, path)?;
            println!("{}", plan);
            println!("Thank you, come again!");
        }
        // InvalidRequest is unreachable here since the prompt loop filters
        // non-positive amounts, but it reads the same as the other refusals.
        Err(e) => {
            println!("Error: {}", e);
        }
    }
    Ok(())
}

fn flush_stdout() -> io::Result<()> {
    io::stdout().flush()
}
