//! Card-number arithmetic
//!
//! Library cards are fixed-width zero-padded decimal strings. The width makes
//! lexicographic ordering on the stored TEXT column coincide with numeric
//! ordering, which the allocator relies on when it reads the current maximum.

pub const CARD_NUMBER_WIDTH: usize = 9;

/// Compute the card number following `last`.
///
/// An absent or unparsable `last` counts as ordinal 0, so the first card
/// issued is `"000000001"` and numbering restarts after corrupt data.
pub fn next_card_number(last: Option<&str>) -> String {
    let last_numeric = last.and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
    format!("{:0width$}", last_numeric + 1, width = CARD_NUMBER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_is_one() {
        assert_eq!(next_card_number(None), "000000001");
    }

    #[test]
    fn increments_by_one() {
        assert_eq!(next_card_number(Some("000000041")), "000000042");
        assert_eq!(next_card_number(Some("000000999")), "000001000");
    }

    #[test]
    fn corrupt_card_restarts_numbering() {
        assert_eq!(next_card_number(Some("not-a-number")), "000000001");
        assert_eq!(next_card_number(Some("")), "000000001");
    }

    #[test]
    fn keeps_nine_digits() {
        assert_eq!(next_card_number(Some("000000001")).len(), CARD_NUMBER_WIDTH);
    }
}
