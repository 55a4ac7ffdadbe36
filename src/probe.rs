//! Double-hash probe sequence over a prime-sized slot array.
//!
//! Both hashes are base-`prime` polynomials over the key's bytes, reduced
//! modulo the capacity after every step. The step hash is forced to be
//! non-zero so each attempt advances; with a prime capacity the first
//! `capacity` attempts therefore visit every slot exactly once.

pub(crate) const PRIME_X: u64 = 2;
pub(crate) const PRIME_Y: u64 = 3;

/// Polynomial string hash, Horner form: `sum(key[i] * prime^(len-1-i)) mod capacity`.
pub(crate) fn hash(key: &str, prime: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let m = capacity as u128;
    let p = prime as u128;
    let h = key
        .bytes()
        .fold(0u128, |acc, b| (acc * p + b as u128) % m);
    h as usize
}

/// Probe sequence for one key at a fixed capacity. Yields at most
/// `capacity` slot indices.
#[derive(Clone, Debug)]
pub(crate) struct Probe {
    start: usize,
    step: usize,
    capacity: usize,
    attempt: usize,
}

impl Probe {
    pub(crate) fn new(key: &str, capacity: usize) -> Self {
        let start = hash(key, PRIME_X, capacity);
        let step = match hash(key, PRIME_Y, capacity) {
            0 => 1,
            s => s,
        };
        Self {
            start,
            step,
            capacity,
            attempt: 0,
        }
    }

    /// Slot index for `attempt`: `(start + attempt * step) mod capacity`.
    #[inline]
    pub(crate) fn index(&self, attempt: usize) -> usize {
        let m = self.capacity as u128;
        let offset = (attempt as u128 % m) * self.step as u128 % m;
        ((self.start as u128 + offset) % m) as usize
    }
}

impl Iterator for Probe {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }
        let idx = self.index(self.attempt);
        self.attempt += 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.capacity - self.attempt;
        (rest, Some(rest))
    }
}
