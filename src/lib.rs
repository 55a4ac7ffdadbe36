//! dhash-table: a single-threaded string map built on open addressing with
//! double hashing, tombstone deletion, and prime-sized resizing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a string → string map whose collisions are resolved purely by a
//!   deterministic probe sequence over one slot array. No chaining, no
//!   per-bucket allocations.
//! - Layers:
//!   - `prime`: primality predicate and successor search used for sizing.
//!   - `probe`: polynomial string hash and the double-hash probe sequence.
//!   - `ProbingTable`: owns the slot array, tracks load, and rehashes into
//!     a fresh array when a threshold is crossed.
//!   - `TableBuilder`/`TableConfig`: thresholds and minimum capacity.
//!
//! Slots
//! - Each slot is `Empty`, `Tombstone`, or `Occupied(entry)`. Tombstones
//!   keep later keys on the same probe chain reachable; `Empty` ends a walk.
//! - Resizing drops every tombstone.
//!
//! Sizing
//! - `base_capacity` is the logical size; the slot count is always
//!   `next_prime(base_capacity)` and never below the configured minimum.
//! - Insert grows (base × 2) when one more entry would push the load above
//!   the grow threshold (70% by default). Delete shrinks (base ÷ 2) when the
//!   load is already below the shrink threshold (10% by default). Resize
//!   targets below the minimum are ignored.
//! - With a prime slot count and a non-zero step, the first `capacity`
//!   probe attempts visit every slot once, so every walk is bounded.
//!
//! Semantics
//! - Inserting a live key overwrites its value and returns the old one,
//!   without resizing.
//! - Deleting an absent key is a no-op; `len` only changes on real removals.
//! - A resize happens in place on `&mut self`. If its allocation fails the
//!   table is left as it was and `TableError::Allocation` is returned.
//!
//! Notes and non-goals
//! - Single-threaded; no interior mutability, so `&mut self` is the only
//!   synchronization.
//! - Keys and values are owned `String`s; lookups hand out `&str`.
//! - No persistence or serialization.
//! - With the `logging` feature, resizes are logged through `log`.

mod config;
mod error;
pub mod prime;
mod probe;
mod probing_table_proptest;
mod table;

// Public surface
pub use config::{
    TableBuilder, TableConfig, DEFAULT_GROW_LOAD_PERCENT, DEFAULT_MIN_CAPACITY,
    DEFAULT_SHRINK_LOAD_PERCENT,
};
pub use error::TableError;
pub use prime::{is_prime, next_prime, Primality};
pub use table::{Iter, ProbingTable};
