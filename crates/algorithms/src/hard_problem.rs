//! Brute-force helpers for the two hard-problem forms on small moduli
//!
//! Form 1.1 is `x^x ≡ y (mod p)`; form 1.2 is `a^x ≡ x^b (mod p)`. The
//! searches are exhaustive and only accepted for tiny moduli.

use nhdss_common::math_common::mod_pow;
use nhdss_params::limits::{MAX_SELF_POWER_MODULUS, MAX_TRANSCENDENTAL_MODULUS};
use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// Outcome of an exhaustive `x^x ≡ y` search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPowerSearch {
    /// Smallest `x` in `[1, p)` with `x^x ≡ y (mod p)`, if any
    pub solution: Option<u64>,
    /// Candidates tried
    pub attempts: u64,
}

fn pow_u64(base: u64, exp: u64, p: u64) -> Result<u64> {
    let value = mod_pow(&BigUint::from(base), &BigUint::from(exp), &BigUint::from(p))?;
    value
        .to_u64()
        .ok_or_else(|| Error::Processing {
            operation: "hard_problem",
            details: "residue does not fit in u64".to_string(),
        })
}

fn check_modulus(p: u64, max: u64) -> Result<()> {
    if p < 2 || p > max {
        return Err(Error::param(
            "p",
            format!("brute force needs 2 <= p <= {}", max),
        ));
    }
    Ok(())
}

/// `(x, x^x mod p)` for `x` in `[1, min(p, limit))`
pub fn self_power_table(p: u64, limit: u64) -> Result<Vec<(u64, u64)>> {
    if p < 2 {
        return Err(Error::param("p", "modulus must be at least 2"));
    }
    (1..p.min(limit))
        .map(|x| pow_u64(x, x, p).map(|y| (x, y)))
        .collect()
}

/// Exhaustive search for `x` with `x^x ≡ y (mod p)`, `p <= 100`
pub fn solve_self_power(y: u64, p: u64) -> Result<SelfPowerSearch> {
    check_modulus(p, MAX_SELF_POWER_MODULUS)?;
    let mut attempts = 0;
    for x in 1..p {
        attempts += 1;
        if pow_u64(x, x, p)? == y {
            return Ok(SelfPowerSearch {
                solution: Some(x),
                attempts,
            });
        }
    }
    Ok(SelfPowerSearch {
        solution: None,
        attempts,
    })
}

/// Every `x` in `[1, p)` with `a^x ≡ x^b (mod p)`, `p <= 50`
pub fn solve_transcendental(a: u64, b: u64, p: u64) -> Result<Vec<u64>> {
    check_modulus(p, MAX_TRANSCENDENTAL_MODULUS)?;
    let mut solutions = Vec::new();
    for x in 1..p {
        if pow_u64(a, x, p)? == pow_u64(x, b, p)? {
            solutions.push(x);
        }
    }
    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_power_table() {
        let table = self_power_table(23, 10).unwrap();
        assert_eq!(
            table,
            vec![(1, 1), (2, 4), (3, 4), (4, 3), (5, 20), (6, 12), (7, 5), (8, 4), (9, 2)]
        );
        assert_eq!(self_power_table(5, 10).unwrap().len(), 4);
        assert!(self_power_table(1, 10).is_err());
    }

    #[test]
    fn test_solve_self_power() {
        let found = solve_self_power(20, 23).unwrap();
        assert_eq!(found.solution, Some(5));
        assert_eq!(found.attempts, 5);

        // 7 is not a self-power residue mod 23
        let missing = solve_self_power(7, 23).unwrap();
        assert_eq!(missing.solution, None);
        assert_eq!(missing.attempts, 22);

        assert!(solve_self_power(1, 101).is_err());
    }

    #[test]
    fn test_solve_transcendental() {
        assert_eq!(solve_transcendental(2, 3, 23).unwrap(), vec![18]);
        assert_eq!(solve_transcendental(3, 2, 47).unwrap(), vec![32, 40, 46]);
        assert!(solve_transcendental(2, 3, 53).is_err());
    }
}
