//! Hex color helpers for glow and shadow styles.

/// Parses `#rgb` or `#rrggbb` into its channels.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// CSS `rgba()` for a hex color at `alpha`. Unparseable colors fall back to
/// white.
pub fn rgba(color: &str, alpha: f64) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => format!("rgba(255,255,255,{})", alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(parse_hex("#60ad5e"), Some((0x60, 0xad, 0x5e)));
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#0a3"), Some((0x00, 0xaa, 0x33)));
    }

    #[test]
    fn test_rgba_formatting() {
        assert_eq!(rgba("#2e7d32", 0.5), "rgba(46, 125, 50, 0.5)");
    }

    #[test]
    fn test_rgba_fallback() {
        assert_eq!(rgba("seagreen", 0.3), "rgba(255,255,255,0.3)");
        assert_eq!(rgba("#12", 1.0), "rgba(255,255,255,1)");
        assert_eq!(rgba("#zzzzzz", 0.2), "rgba(255,255,255,0.2)");
    }
}
