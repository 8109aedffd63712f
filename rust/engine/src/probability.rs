//! Exact bid probabilities over dice the engine cannot see.
//!
//! Every unknown die is an independent trial. For a bid on ones a die succeeds
//! with probability 1/6; for any other face it succeeds on that face or on a
//! wild one, 2/6 = 1/3. The chance a bid holds is the upper tail of the
//! resulting binomial distribution.
//!
//! The tail is summed as an exact integer numerator over `den^n` while that
//! fits in `u128` (49 unknown dice for ones, 80 for other faces); the sum is
//! exact and rounding enters only in the closing `f64` division. Larger tables
//! sum each term in log space, which stays finite for any number of dice.

use crate::dice::{Face, FaceCounts};

/// Success chance of one unknown die, as the fraction `num / den`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Odds {
    pub num: u32,
    pub den: u32,
}

impl Odds {
    pub fn for_face(face: Face) -> Odds {
        if face.is_wild() {
            Odds { num: 1, den: 6 }
        } else {
            Odds { num: 1, den: 3 }
        }
    }

    fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

/// Dice in `known` that already count toward a bid on `face`.
pub fn known_toward(face: Face, known: &FaceCounts) -> u32 {
    let direct = known[face.index()];
    if face.is_wild() {
        direct
    } else {
        direct + known[Face::One.index()]
    }
}

/// Probability that at least `quantity` dice show `face` among `total` dice,
/// of which `known` are visible and `unknown` are hidden.
///
/// # Examples
///
/// ```
/// use liardice_engine::dice::Face;
/// use liardice_engine::probability::bid_probability;
///
/// // own dice 1, 2, 2, 5, 6 with five more hidden
/// let known = [1, 2, 0, 0, 1, 1];
/// assert_eq!(bid_probability(2, Face::Two, &known, 5, 10), 1.0);
/// assert_eq!(bid_probability(4, Face::Three, &known, 5, 10), 51.0 / 243.0);
/// assert_eq!(bid_probability(11, Face::Two, &known, 5, 10), 0.0);
/// ```
pub fn bid_probability(
    quantity: u32,
    face: Face,
    known: &FaceCounts,
    unknown: u32,
    total: u32,
) -> f64 {
    let held = known_toward(face, known);
    if quantity <= held {
        return 1.0;
    }
    let needed = quantity - held;
    if quantity > total || needed > unknown {
        return 0.0;
    }
    binomial_tail(unknown, needed, Odds::for_face(face))
}

/// `P(X >= k_min)` for `X ~ Binomial(n, odds)`.
pub fn binomial_tail(n: u32, k_min: u32, odds: Odds) -> f64 {
    if k_min == 0 {
        return 1.0;
    }
    if k_min > n {
        return 0.0;
    }
    exact_tail(n, k_min, odds).unwrap_or_else(|| float_tail(n, k_min, odds))
}

/// `C(n, k)` as a falling factorial over the smaller of `k` and `n - k`.
/// Each partial product is itself a binomial coefficient, so the division is
/// exact. `None` on overflow.
pub fn binomial_coefficient(n: u32, k: u32) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        c = c.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(c)
}

fn exact_tail(n: u32, k_min: u32, odds: Odds) -> Option<f64> {
    let den = u128::from(odds.den).checked_pow(n)?;
    let hit = u128::from(odds.num);
    let miss = u128::from(odds.den - odds.num);
    let mut num: u128 = 0;
    for k in k_min..=n {
        let term = binomial_coefficient(n, k)?
            .checked_mul(hit.checked_pow(k)?)?
            .checked_mul(miss.checked_pow(n - k)?)?;
        num = num.checked_add(term)?;
    }
    Some(num as f64 / den as f64)
}

fn float_tail(n: u32, k_min: u32, odds: Odds) -> f64 {
    let ln_p = odds.as_f64().ln();
    let ln_q = (1.0 - odds.as_f64()).ln();
    // Terms run from k = n down to k_min.
    let mut ln_c = 0.0_f64;
    let mut sum = 0.0_f64;
    let mut k = n;
    loop {
        sum += (ln_c + f64::from(k) * ln_p + f64::from(n - k) * ln_q).exp();
        if k == k_min {
            break;
        }
        // C(n, k-1) = C(n, k) * k / (n - k + 1)
        ln_c += f64::from(k).ln() - f64::from(n - k + 1).ln();
        k -= 1;
    }
    sum.clamp(0.0, 1.0)
}
