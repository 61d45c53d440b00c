//! Font sizes offered by the size box.

/// Point sizes listed in a font-size drop-down.
pub const STANDARD_SIZES: [f32; 16] = [
    8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 36.0, 48.0, 72.0,
];

/// Parse user-entered size text. Only finite, positive numbers are sizes.
pub fn parse_size(text: &str) -> Option<f32> {
    let text = text.trim();
    let text = text.strip_suffix("pt").unwrap_or(text).trim_end();
    text.parse::<f32>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_accepts_numbers() {
        assert_eq!(parse_size("12"), Some(12.0));
        assert_eq!(parse_size(" 10.5 "), Some(10.5));
        assert_eq!(parse_size("14pt"), Some(14.0));
    }

    #[test]
    fn test_parse_size_rejects_garbage() {
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("big"), None);
        assert_eq!(parse_size("0"), None);
        assert_eq!(parse_size("-3"), None);
        assert_eq!(parse_size("NaN"), None);
        assert_eq!(parse_size("inf"), None);
    }

    #[test]
    fn test_standard_sizes_ascending() {
        assert!(STANDARD_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(STANDARD_SIZES.first(), Some(&8.0));
        assert_eq!(STANDARD_SIZES.last(), Some(&72.0));
    }
}
