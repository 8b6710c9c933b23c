//! Presentation helpers for projected fields.

/// Render a population with US-locale thousands separators.
///
/// `39538223` becomes `"39,538,223"`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_population(39_538_223), "39,538,223");
        assert_eq!(format_population(576_851), "576,851");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(1_455_271), "1,455,271");
    }

    #[test]
    fn small_numbers_are_untouched() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
    }
}
