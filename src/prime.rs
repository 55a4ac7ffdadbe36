//! Prime oracle used to size the slot array.

/// Outcome of a primality test.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Primality {
    /// Primality is not defined for integers below 2.
    Undefined,
    Composite,
    Prime,
}

impl Primality {
    #[inline]
    pub fn is_prime(self) -> bool {
        self == Primality::Prime
    }
}

/// Trial division by odd divisors up to `sqrt(n)`.
pub fn is_prime(n: u64) -> Primality {
    if n < 2 {
        return Primality::Undefined;
    }
    if n < 4 {
        return Primality::Prime;
    }
    if n % 2 == 0 {
        return Primality::Composite;
    }
    let mut i = 3u64;
    // `i <= n / i` avoids overflowing `i * i` near `u64::MAX`.
    while i <= n / i {
        if n % i == 0 {
            return Primality::Composite;
        }
        i += 2;
    }
    Primality::Prime
}

/// Smallest prime `>= n`, or `None` when no such prime fits in a `u64`
/// (`n` above `2^64 - 59`).
pub fn next_prime(mut n: u64) -> Option<u64> {
    while !is_prime(n).is_prime() {
        n = n.checked_add(1)?;
    }
    Some(n)
}
