//! Prime streams.
//!
//! The hypothesis tester only needs "every prime up to a bound, ascending".
//! [`PrimeSource`] is that contract; [`Sieve`] is the default source.

/// Supplies primes in increasing order up to an inclusive bound.
pub trait PrimeSource {
    fn primes_up_to(&self, bound: u64) -> Vec<u64>;
}

/// Sieve of Eratosthenes, rebuilt per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sieve;

impl PrimeSource for Sieve {
    fn primes_up_to(&self, bound: u64) -> Vec<u64> {
        if bound < 2 {
            return Vec::new();
        }
        let limit = bound as usize;
        let mut composite = vec![false; limit + 1];
        let mut primes = Vec::new();
        for i in 2..=limit {
            if composite[i] {
                continue;
            }
            primes.push(i as u64);
            let mut multiple = i * i;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += i;
            }
        }
        primes
    }
}

/// Any closure with the right shape is a prime source.
impl<F> PrimeSource for F
where
    F: Fn(u64) -> Vec<u64>,
{
    fn primes_up_to(&self, bound: u64) -> Vec<u64> {
        self(bound)
    }
}
