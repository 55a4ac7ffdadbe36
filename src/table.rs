//! ProbingTable: open-addressed string map with double hashing, tombstones,
//! and prime-sized resizing.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::prime::next_prime;
use crate::probe::Probe;
use core::fmt;
use core::mem;

#[derive(Clone, Debug, Eq, PartialEq)]
struct Entry {
    key: String,
    value: String,
}

/// Slot lifecycle: `Empty -> Occupied -> Tombstone -> Occupied ...`.
/// Tombstones keep probe chains intact until the next resize drops them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Entry),
}

impl Slot {
    fn into_value(self) -> Option<String> {
        match self {
            Slot::Occupied(e) => Some(e.value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }
}

/// Slot count for the default minimum base capacity of 50.
const DEFAULT_SLOT_COUNT: usize = 53;

fn slot_count(base_capacity: usize) -> Result<usize, TableError> {
    next_prime(base_capacity as u64)
        .and_then(|p| usize::try_from(p).ok())
        .ok_or(TableError::CapacityOverflow { base_capacity })
}

fn allocate_slots(capacity: usize) -> Result<Vec<Slot>, TableError> {
    let mut slots = Vec::new();
    if let Err(source) = slots.try_reserve_exact(capacity) {
        #[cfg(feature = "logging")]
        log::error!("failed to reserve {capacity} slots: {source}");
        return Err(TableError::Allocation { capacity, source });
    }
    slots.resize_with(capacity, Slot::default);
    Ok(slots)
}

/// First Empty slot on `key`'s probe sequence. Only used while rehashing
/// into a fresh array, where keys are known to be unique.
fn vacant_index(slots: &[Slot], key: &str) -> Result<usize, TableError> {
    Probe::new(key, slots.len())
        .find(|&idx| matches!(slots[idx], Slot::Empty))
        .ok_or(TableError::Saturated {
            capacity: slots.len(),
        })
}

pub struct ProbingTable {
    slots: Vec<Slot>,
    base_capacity: usize,
    count: usize,
    tombstones: usize,
    config: TableConfig,
}

impl ProbingTable {
    /// Creates a table at the default minimum capacity (50, rounded up to 53).
    pub fn new() -> Self {
        let config = TableConfig::default();
        let base_capacity = config.min_capacity;
        Self {
            slots: vec![Slot::Empty; DEFAULT_SLOT_COUNT],
            base_capacity,
            count: 0,
            tombstones: 0,
            config,
        }
    }

    /// Creates a table with `initial_capacity` as its base capacity, raised to
    /// the default minimum if smaller. The slot count is the next prime.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, TableError> {
        Self::with_config(initial_capacity, TableConfig::default())
    }

    pub fn builder() -> crate::TableBuilder {
        crate::TableBuilder::new()
    }

    pub(crate) fn with_config(
        initial_capacity: usize,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        let base_capacity = initial_capacity.max(config.min_capacity);
        let slots = allocate_slots(slot_count(base_capacity)?)?;
        Ok(Self {
            slots,
            base_capacity,
            count: 0,
            tombstones: 0,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Physical slot count. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Logical capacity before prime rounding; grow doubles it, shrink halves it.
    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    /// Number of tombstoned slots since the last resize.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// `len * 100 / capacity`, rounded down.
    pub fn load_percent(&self) -> usize {
        self.load_with(self.count)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn load_with(&self, count: usize) -> usize {
        count.saturating_mul(100) / self.capacity()
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        for idx in Probe::new(key, self.capacity()) {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(e) if e.key == key => return Some(idx),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    pub fn find(&self, key: &str) -> Option<&str> {
        let idx = self.find_index(key)?;
        match &self.slots[idx] {
            Slot::Occupied(e) => Some(e.value.as_str()),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Inserts `key -> value`, overwriting and returning the previous value
    /// if the key is already live.
    ///
    /// Overwriting never resizes. Otherwise the table grows first if one more
    /// entry would push the load above the grow threshold, so the load bound
    /// holds once this returns. New entries reuse the first tombstone on the
    /// key's probe sequence.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<String>, TableError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();

        if let Some(idx) = self.find_index(&key) {
            if let Slot::Occupied(e) = &mut self.slots[idx] {
                return Ok(Some(mem::replace(&mut e.value, value)));
            }
        }

        while self.load_with(self.count + 1) > self.config.grow_load_percent {
            if !self.grow()? {
                break;
            }
        }

        let mut free = None;
        for idx in Probe::new(&key, self.capacity()) {
            match self.slots[idx] {
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    if free.is_none() {
                        free = Some(idx);
                    }
                }
                Slot::Empty => {
                    free = free.or(Some(idx));
                    break;
                }
            }
        }

        let idx = free.ok_or(TableError::Saturated {
            capacity: self.capacity(),
        })?;
        if let Slot::Tombstone = self.slots[idx] {
            self.tombstones -= 1;
        }
        self.slots[idx] = Slot::Occupied(Entry { key, value });
        self.count += 1;
        Ok(None)
    }

    /// Removes `key`, returning its value. Deleting an absent key is a no-op
    /// that returns `Ok(None)`.
    ///
    /// If the load is already below the shrink threshold the table shrinks
    /// before the removal; that is the only way this can fail.
    pub fn delete(&mut self, key: &str) -> Result<Option<String>, TableError> {
        if self.load_percent() < self.config.shrink_load_percent {
            self.shrink()?;
        }

        let Some(idx) = self.find_index(key) else {
            return Ok(None);
        };
        let removed = mem::replace(&mut self.slots[idx], Slot::Tombstone);
        self.count -= 1;
        self.tombstones += 1;
        Ok(removed.into_value())
    }

    fn grow(&mut self) -> Result<bool, TableError> {
        let target = self.base_capacity.saturating_mul(2);
        if target == self.base_capacity {
            return Ok(false);
        }
        self.resize(target)
    }

    fn shrink(&mut self) -> Result<bool, TableError> {
        self.resize(self.base_capacity / 2)
    }

    /// Rehashes every live entry into a fresh array of `next_prime(target)`
    /// slots and drops all tombstones. Returns `Ok(false)` without touching
    /// the table when `target` is below the minimum capacity or the entries
    /// would not fit under the grow threshold. On any error the table is
    /// unchanged: every entry's new slot is reserved before any entry moves.
    fn resize(&mut self, target: usize) -> Result<bool, TableError> {
        if target < self.config.min_capacity {
            return Ok(false);
        }
        let capacity = slot_count(target)?;
        if self.count.saturating_mul(100) / capacity > self.config.grow_load_percent {
            return Ok(false);
        }

        let mut fresh = allocate_slots(capacity)?;
        let mut moves = Vec::with_capacity(self.count);
        for (from, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied(e) = slot {
                let to = vacant_index(&fresh, &e.key)?;
                // Claimed until the entry moves in below.
                fresh[to] = Slot::Tombstone;
                moves.push((from, to));
            }
        }
        for (from, to) in moves {
            fresh[to] = mem::take(&mut self.slots[from]);
        }

        #[cfg(feature = "logging")]
        let (old_capacity, dropped) = (self.slots.len(), self.tombstones);
        self.slots = fresh;
        self.base_capacity = target;
        self.tombstones = 0;

        #[cfg(feature = "logging")]
        log::debug!(
            "resized table from {old_capacity} to {capacity} slots \
             ({} entries moved, {dropped} tombstones dropped)",
            self.count
        );
        Ok(true)
    }

    /// Iterates live entries in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
            remaining: self.count,
        }
    }
}

impl Default for ProbingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over live `(key, value)` pairs in a `ProbingTable`.
pub struct Iter<'a> {
    it: core::slice::Iter<'a, Slot>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.it.by_ref() {
            if let Slot::Occupied(e) = slot {
                self.remaining -= 1;
                return Some((e.key.as_str(), e.value.as_str()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ProbingTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
