//! Roman numeral to integer conversion.
//!
//! The converter is positional, not validating: each symbol is compared
//! against its lookahead and subtracted when strictly smaller, added
//! otherwise. Any character sequence therefore produces a deterministic
//! integer, including sequences that are not well-formed Roman numerals.

/// Permissive stand-in for symbols outside the classic set. It participates
/// in the comparison and arithmetic so malformed input degrades into
/// deterministic garbage instead of an error.
const INVALID_VALUE: i64 = -1;

/// Value of a single Roman symbol, or `None` outside {I,V,X,L,C,D,M}.
pub fn symbol_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// True when `numeral` is non-empty and built only from the classic seven
/// symbols. This never gates conversion; it feeds malformed-line reporting.
pub fn is_classic_numeral(numeral: &str) -> bool {
    !numeral.is_empty() && numeral.chars().all(|c| symbol_value(c).is_some())
}

/// Convert a symbol sequence to an integer with the subtractive-pair rule.
///
/// The lookahead for the final position resolves to `INVALID_VALUE`, which
/// is never greater than the current value, so the last symbol always adds.
pub fn roman_to_integer(numeral: &str) -> i64 {
    let symbols: Vec<char> = numeral.chars().collect();
    let mut total = 0;

    for (i, &symbol) in symbols.iter().enumerate() {
        let current = symbol_value(symbol).unwrap_or(INVALID_VALUE);
        let next = symbols
            .get(i + 1)
            .map(|&s| symbol_value(s).unwrap_or(INVALID_VALUE))
            .unwrap_or(INVALID_VALUE);

        if current < next {
            total -= current;
        } else {
            total += current;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbols() {
        assert_eq!(roman_to_integer("I"), 1);
        assert_eq!(roman_to_integer("V"), 5);
        assert_eq!(roman_to_integer("X"), 10);
        assert_eq!(roman_to_integer("L"), 50);
        assert_eq!(roman_to_integer("C"), 100);
        assert_eq!(roman_to_integer("D"), 500);
        assert_eq!(roman_to_integer("M"), 1000);
    }

    #[test]
    fn test_subtractive_pairs() {
        assert_eq!(roman_to_integer("IV"), 4);
        assert_eq!(roman_to_integer("IX"), 9);
        assert_eq!(roman_to_integer("XL"), 40);
        assert_eq!(roman_to_integer("XC"), 90);
        assert_eq!(roman_to_integer("CD"), 400);
        assert_eq!(roman_to_integer("CM"), 900);
    }

    #[test]
    fn test_compound_numerals() {
        assert_eq!(roman_to_integer("XIV"), 14);
        assert_eq!(roman_to_integer("XXIV"), 24);
        assert_eq!(roman_to_integer("MCMXCIV"), 1994);
        assert_eq!(roman_to_integer("MMXXIV"), 2024);
        assert_eq!(roman_to_integer("MMMCMXCIX"), 3999);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(roman_to_integer(""), 0);
    }

    #[test]
    fn test_unknown_symbols_are_deterministic() {
        // 'A' alone contributes the invalid value
        assert_eq!(roman_to_integer("A"), -1);
        // 'A' (-1) precedes 'V' (5): -1 < 5 subtracts -1, then V adds 5
        assert_eq!(roman_to_integer("AV"), 6);
        assert_eq!(roman_to_integer("AV"), roman_to_integer("AV"));
    }

    #[test]
    fn test_classic_numeral_check() {
        assert!(is_classic_numeral("MMXXIV"));
        assert!(is_classic_numeral("I"));
        assert!(!is_classic_numeral(""));
        assert!(!is_classic_numeral("XIVa"));
        assert!(!is_classic_numeral("42"));
    }
}
