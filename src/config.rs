//! Load thresholds and sizing knobs, plus the builder that validates them.

use crate::error::TableError;
use crate::table::ProbingTable;

/// Default minimum (and initial) base capacity.
pub const DEFAULT_MIN_CAPACITY: usize = 50;
/// Grow when an insert would push the load above this percentage.
pub const DEFAULT_GROW_LOAD_PERCENT: usize = 70;
/// Shrink when a delete starts with the load below this percentage.
pub const DEFAULT_SHRINK_LOAD_PERCENT: usize = 10;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    pub min_capacity: usize,
    pub grow_load_percent: usize,
    pub shrink_load_percent: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            grow_load_percent: DEFAULT_GROW_LOAD_PERCENT,
            shrink_load_percent: DEFAULT_SHRINK_LOAD_PERCENT,
        }
    }
}

impl TableConfig {
    pub(crate) fn validate(&self) -> Result<(), TableError> {
        if self.min_capacity == 0 {
            return Err(TableError::InvalidConfig("min_capacity must be at least 1"));
        }
        if self.grow_load_percent == 0 || self.grow_load_percent >= 100 {
            return Err(TableError::InvalidConfig(
                "grow_load_percent must be in 1..100",
            ));
        }
        if self.shrink_load_percent >= self.grow_load_percent {
            return Err(TableError::InvalidConfig(
                "shrink_load_percent must be below grow_load_percent",
            ));
        }
        Ok(())
    }
}

/// Builds a [`ProbingTable`] with custom thresholds.
///
/// # Examples
///
/// ```rust
/// use dhash_table::TableBuilder;
///
/// let mut table = TableBuilder::new()
///     .initial_capacity(200)
///     // Grow earlier than the default 70%.
///     .grow_load_percent(50)
///     .build()
///     .unwrap();
///
/// table.insert("k", "v").unwrap();
/// assert_eq!(table.find("k"), Some("v"));
/// assert_eq!(table.capacity(), 211);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    initial_capacity: Option<usize>,
    config: TableConfig,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial base capacity. Values below the minimum capacity are
    /// raised to it.
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: Some(capacity),
            ..self
        }
    }

    /// Sets the floor for the base capacity. Shrinks never go below it.
    pub fn min_capacity(mut self, capacity: usize) -> Self {
        self.config.min_capacity = capacity;
        self
    }

    pub fn grow_load_percent(mut self, percent: usize) -> Self {
        self.config.grow_load_percent = percent;
        self
    }

    pub fn shrink_load_percent(mut self, percent: usize) -> Self {
        self.config.shrink_load_percent = percent;
        self
    }

    /// Validates the configuration and allocates the table.
    pub fn build(self) -> Result<ProbingTable, TableError> {
        self.config.validate()?;
        let initial = self.initial_capacity.unwrap_or(self.config.min_capacity);
        ProbingTable::with_config(initial, self.config)
    }
}
