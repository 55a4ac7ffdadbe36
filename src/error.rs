use std::collections::TryReserveError;

/// Errors surfaced by [`ProbingTable`][crate::ProbingTable] and
/// [`TableBuilder`][crate::TableBuilder].
///
/// Looking up or deleting an absent key is not an error.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// The slot array could not be reserved, at creation or during a resize.
    /// A failed resize leaves the table unchanged.
    #[error("failed to allocate a slot array of {capacity} slots")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// No prime slot count at or above `base_capacity` is representable.
    #[error("no prime slot count at or above {base_capacity} fits in usize")]
    CapacityOverflow { base_capacity: usize },

    /// The builder was given thresholds that cannot keep a free slot
    /// available.
    #[error("invalid table configuration: {0}")]
    InvalidConfig(&'static str),

    /// The probe sequence visited every slot without finding a free one,
    /// either for a new key or while rehashing. Valid thresholds always leave
    /// room, so this indicates a table that could not grow any further.
    #[error("no free slot along the probe sequence of a {capacity}-slot table")]
    Saturated { capacity: usize },
}
