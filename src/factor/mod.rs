//! Trial-division factorization and p-adic valuations.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::model::PrimeFactorization;
use crate::{Error, Result};

/// Prime factors of `n` with repetition, non-decreasing. `factorize(1)` is
/// empty.
///
/// Each divisor is divided out completely before the next is tried, so
/// every recorded divisor is prime. The search stops once `d * d` exceeds
/// the cofactor; a cofactor above 1 at that point is itself prime.
pub fn factorize(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(Error::InvalidArgument("cannot factorize 0".into()));
    }

    let mut rest = n;
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d.checked_mul(d).is_some_and(|sq| sq <= rest) {
        if rest % d == 0 {
            rest /= d;
            factors.push(d);
        } else {
            d += 1;
        }
    }
    if rest > 1 {
        factors.push(rest);
    }
    Ok(factors)
}

/// [`factorize`] for arbitrary-precision values such as degrees and hook
/// products.
///
/// Those values only have prime factors up to `n`, so the trial loop ends
/// quickly. An input with two large prime factors would still be slow.
pub fn factorize_big(n: &BigUint) -> Result<Vec<BigUint>> {
    if n.is_zero() {
        return Err(Error::InvalidArgument("cannot factorize 0".into()));
    }

    let mut rest = n.clone();
    let mut factors = Vec::new();
    let mut d = 2u64;
    while BigUint::from(d) * d <= rest {
        let (quot, rem) = rest.div_rem(&BigUint::from(d));
        if rem.is_zero() {
            rest = quot;
            factors.push(BigUint::from(d));
        } else {
            d += 1;
        }
    }
    if rest > BigUint::one() {
        factors.push(rest);
    }
    Ok(factors)
}

/// Grouped form of [`factorize_big`].
pub fn prime_factorization(n: &BigUint) -> Result<PrimeFactorization> {
    Ok(PrimeFactorization::from_factors(factorize_big(n)?))
}

/// Exponent of the prime `p` in `value`.
pub fn valuation(value: &BigUint, p: u64) -> Result<u32> {
    if p < 2 {
        return Err(Error::InvalidArgument(format!("{p} is not a prime")));
    }
    if value.is_zero() {
        return Err(Error::InvalidArgument("0 has no finite valuation".into()));
    }

    let p = BigUint::from(p);
    let mut rest = value.clone();
    let mut count = 0;
    loop {
        let (quot, rem) = rest.div_rem(&p);
        if !rem.is_zero() {
            return Ok(count);
        }
        rest = quot;
        count += 1;
    }
}

/// Exponent of the prime `p` in `n!`, without forming `n!`.
///
/// Legendre: `Σ_{k ≥ 1} ⌊n / p^k⌋`.
pub fn factorial_valuation(n: u32, p: u64) -> Result<u64> {
    if p < 2 {
        return Err(Error::InvalidArgument(format!("{p} is not a prime")));
    }

    let n = u64::from(n);
    let mut total = 0;
    let mut power = p;
    while power <= n {
        total += n / power;
        power = match power.checked_mul(p) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(total)
}
