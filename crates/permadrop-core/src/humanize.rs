//! Human-readable byte formatting for log and CLI output.

/// Unit labels indexed by successive division by 1024.
const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count as `"<value> <unit>"`, e.g. `1536` becomes `"1.5 KB"`.
///
/// Zero is rendered as `"0 Bytes"`. Values are rounded to two decimal places
/// with trailing zeros trimmed, and the unit is chosen by repeated division
/// by 1024, capped at TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_bytes(1024u64.pow(4)), "1 TB");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 + 256), "1.25 KB");
    }

    #[test]
    fn values_round_to_two_decimals() {
        // 1.333... KB rounds to 1.33
        assert_eq!(format_bytes(1365), "1.33 KB");
        assert_eq!(format_bytes(2_621_440), "2.5 MB");
    }

    #[test]
    fn unit_is_capped_at_tb() {
        let petabyte = 1024u64.pow(5);
        assert_eq!(format_bytes(petabyte), "1024 TB");
    }

    #[test]
    fn rendered_value_is_close_to_input() {
        for &bytes in &[1u64, 999, 1024, 4096, 123_456, 9_876_543, 1024u64.pow(4) + 7] {
            let rendered = format_bytes(bytes);
            let mut parts = rendered.split(' ');
            let value: f64 = parts.next().unwrap().parse().unwrap();
            let unit = parts.next().unwrap();
            let scale = 1024f64.powi(UNITS.iter().position(|u| *u == unit).unwrap() as i32);
            let error = (value * scale - bytes as f64).abs();
            assert!(error <= 0.01 * scale, "{} rendered as {}", bytes, rendered);
        }
    }
}
