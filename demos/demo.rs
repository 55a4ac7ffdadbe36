//! Inserts three pairs, looks one up, and prints its value.
//!
//! Run with `RUST_LOG=debug cargo run --example demo --features logging` to
//! see resize messages.

use dhash_table::{ProbingTable, TableError};

fn main() -> Result<(), TableError> {
    env_logger::init();

    let mut table = ProbingTable::with_capacity(50)?;
    table.insert("34", "Mike")?;
    table.insert("56", "Time")?;
    table.insert("104", "Love")?;

    if let Some(value) = table.find("34") {
        println!("{value}");
    }
    Ok(())
}
