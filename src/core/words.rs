//! Integer to English words rendering.
//!
//! The value is decomposed into 3-digit groups low-to-high; each non-zero
//! group is rendered with unit/teen/tens tables plus its scale word, and the
//! groups are assembled most-significant-first into a single space-joined
//! string with no leading or trailing space.

const UNIT_WORDS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEEN_WORDS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS_WORDS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALE_WORDS: [&str; 4] = ["", "Thousand", "Million", "Billion"];

/// Render one 3-digit group (1..=999) as a word sequence.
fn group_words(group: u64) -> Vec<&'static str> {
    let mut words = Vec::new();

    let hundreds = (group / 100) as usize;
    if hundreds > 0 {
        words.push(UNIT_WORDS[hundreds]);
        words.push("Hundred");
    }

    let rest = group % 100;
    if (10..=19).contains(&rest) {
        words.push(TEEN_WORDS[(rest - 10) as usize]);
    } else {
        let tens = (rest / 10) as usize;
        if tens > 0 {
            words.push(TENS_WORDS[tens]);
        }
        let units = (rest % 10) as usize;
        if units > 0 {
            words.push(UNIT_WORDS[units]);
        }
    }

    words
}

/// Render an integer as capitalized English words.
///
/// Zero renders as "Zero". Negative values (reachable through subtraction)
/// render as the magnitude prefixed with "Negative". Groups past the Billion
/// scale carry no scale word; the renderer stays total either way.
pub fn integer_to_words(value: i64) -> String {
    if value == 0 {
        return "Zero".to_string();
    }

    let mut magnitude = value.unsigned_abs();
    let mut groups: Vec<String> = Vec::new();
    let mut scale = 0usize;

    while magnitude > 0 {
        let group = magnitude % 1000;
        if group > 0 {
            let mut words = group_words(group);
            if let Some(name) = SCALE_WORDS.get(scale).copied().filter(|s| !s.is_empty()) {
                words.push(name);
            }
            groups.push(words.join(" "));
        }
        magnitude /= 1000;
        scale += 1;
    }

    // Groups were produced low-to-high; the report reads high-to-low.
    groups.reverse();
    let rendered = groups.join(" ");

    if value < 0 {
        format!("Negative {}", rendered)
    } else {
        rendered
    }
}
