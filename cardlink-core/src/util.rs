/// Zero-pad the numeric portion of a collector number to three digits
/// (e.g., "7" → "007", "42" → "042", "123" → "123").
///
/// Non-numeric input is returned unchanged — some promo identifiers carry
/// letter suffixes and padding them would corrupt the code.
pub fn zero_pad3(s: &str) -> String {
    match s.parse::<u32>() {
        Ok(n) => format!("{n:03}"),
        Err(_) => s.to_string(),
    }
}

/// Whether a string is entirely upper-case letters (ignoring digits,
/// whitespace, and punctuation), with at least one letter present.
///
/// Used to filter supplied alternate names that are pure abbreviations
/// (e.g., "ISB") — the downstream matcher handles those separately.
pub fn is_all_uppercase(s: &str) -> bool {
    let mut saw_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if c.is_lowercase() {
                return false;
            }
            saw_letter = true;
        }
    }
    saw_letter
}
