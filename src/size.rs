//! Human-readable byte counts
//!
//! Card and detail views show sizes in binary units (`1 KB = 1024 B`) with a
//! single decimal digit, e.g. `1536` bytes render as `1.5 KB`.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Format a byte count for display
///
/// The unit is the largest of `B`, `KB`, `MB`, `GB` whose value is at least
/// one. Anything past 1024 GB stays in GB.
///
/// # Examples
///
/// ```
/// use tagdeck::size::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1_048_576), "1.0 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let idx = unit_index(bytes);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let value = bytes as f64 / STEP.pow(idx as u32) as f64;
    // Ties round up (2.25 -> 2.3), not to even
    let rounded = (value * 10.0).round() / 10.0;

    format!("{rounded:.1} {}", UNITS[idx])
}

/// floor(log1024(bytes)), clamped to the last unit
fn unit_index(bytes: u64) -> usize {
    let mut idx = 0;
    let mut threshold = STEP;

    while idx < UNITS.len() - 1 && bytes >= threshold {
        idx += 1;
        threshold = threshold.saturating_mul(STEP);
    }

    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_plain_bytes() {
        assert_eq!(format_size(1), "1.0 B");
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 2.25 MB
        assert_eq!(format_size(2_359_296), "2.3 MB");
        assert_eq!(format_size(1126), "1.1 KB");
        // 10.75 KB
        assert_eq!(format_size(11_008), "10.8 KB");
    }

    #[test]
    fn test_clamped_at_gigabytes() {
        let two_tb = 2 * 1024 * 1_073_741_824_u64;
        assert_eq!(format_size(two_tb), "2048.0 GB");
        assert!(format_size(u64::MAX).ends_with(" GB"));
    }

    #[test]
    fn test_unit_index() {
        assert_eq!(unit_index(1), 0);
        assert_eq!(unit_index(1024), 1);
        assert_eq!(unit_index(1_048_575), 1);
        assert_eq!(unit_index(1_048_576), 2);
        assert_eq!(unit_index(u64::MAX), 3);
    }
}
