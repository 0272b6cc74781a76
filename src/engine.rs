use serde::Serialize;
use tracing::debug;

use crate::constants::{letter_weight, MASTER_NUMBERS};

/// A counted letter of a name together with its table weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterWeight {
    pub letter: char,
    pub weight: u32,
}

/// Upper-case the name and keep only the letters the table knows about, in input order.
/// `to_uppercase` is locale independent, so "ß" becomes "SS" and accented letters fall out.
pub fn breakdown(name: &str) -> Vec<LetterWeight> {
    name.to_uppercase()
        .chars()
        .filter_map(|letter| letter_weight(letter).map(|weight| LetterWeight { letter, weight }))
        .collect()
}

/// Sum of the weights of every counted letter.
/// Summed in `u64` straight off the upper-cased characters, so long inputs neither overflow
/// nor allocate a breakdown.
pub fn letter_sum(name: &str) -> u64 {
    name.to_uppercase()
        .chars()
        .filter_map(letter_weight)
        .map(u64::from)
        .sum()
}

pub fn is_master(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

/// Sum of the decimal digits of `value`
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Reduction chain of a letter sum, starting with the sum itself and ending with the result.
///
/// Only the initial sum is checked against the master numbers; intermediate values that
/// happen to be 11 or 22 keep reducing.
pub fn reduce(total: u64) -> Vec<u64> {
    let mut chain = vec![total];
    if u32::try_from(total).map_or(false, is_master) {
        return chain;
    }

    let mut current = total;
    while current >= 10 {
        current = digit_sum(current);
        chain.push(current);
    }
    chain
}

/// Numerology value of an already validated name.
///
/// Returns a single digit, 11 or 22. A name with no counted letters returns 0, which the
/// catalog does not recognise.
pub fn compute_value(name: &str) -> u32 {
    let total = letter_sum(name);
    let chain = reduce(total);
    // The chain always ends below 10 or on a master number
    let value = chain.last().map_or(0, |&last| last as u32);

    if is_master(value) {
        debug!(total, "letter sum is a master number");
    } else {
        debug!(total, value, steps = chain.len() - 1, "reduced letter sum");
    }
    value
}
