// WHY: Spelled-out counts for phrase prefixes ("three short swords")

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "zero", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
    "eighty", "ninety",
];

/// Largest magnitude spelled out in words; anything above is printed numerically
pub const MAX_SPELLED: u64 = 99;

/// Spell out a number between -99 and 99
///
/// Negative values in range get a "minus " word prefix. Outside the range
/// the decimal numeral is returned, with a plain `-` sign when negative.
pub fn int_to_words(num: i64) -> String {
    let magnitude = num.unsigned_abs();
    let negative = num < 0;

    if magnitude > MAX_SPELLED {
        let sign = if negative { "-" } else { "" };
        return format!("{sign}{magnitude}");
    }

    let sign = if negative { "minus " } else { "" };
    // In range, so the casts below cannot truncate
    let magnitude = magnitude as usize;

    if magnitude < ONES.len() {
        return format!("{sign}{}", ONES[magnitude]);
    }

    let (tens, ones) = (magnitude / 10, magnitude % 10);
    if ones == 0 {
        format!("{sign}{}", TENS[tens])
    } else {
        format!("{sign}{}-{}", TENS[tens], ONES[ones])
    }
}
