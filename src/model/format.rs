//! Human readable rendering of raw config values

/// How much interpretation to apply to a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    /// Units resolved from the key name (durations, byte sizes)
    #[default]
    Friendly,
    /// The value exactly as the API returned it
    Raw,
}

/// Kafka's "no limit" sentinel for sizes and durations
pub const INFINITE_SENTINEL: i64 = -1;

/// Format a config value for display.
///
/// Keys ending in `.ms` are shown as durations and keys ending in `bytes` as
/// binary sizes; `-1` on either reads "Infinite". Anything that does not
/// parse as a number is returned unchanged.
pub fn format_config_value(name: &str, value: Option<&str>, mode: FormatMode) -> String {
    let raw = match value {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };
    if mode == FormatMode::Raw {
        return raw.to_string();
    }

    let is_duration = name.ends_with(".ms");
    let is_size = name.ends_with("bytes");
    if !is_duration && !is_size {
        return raw.to_string();
    }

    let Ok(number) = raw.trim().parse::<i64>() else {
        return raw.to_string();
    };
    if number == INFINITE_SENTINEL {
        return "Infinite".to_string();
    }
    if number < 0 {
        return raw.to_string();
    }

    if is_duration {
        format_duration_ms(number as u64)
    } else {
        format_bytes(number as u64)
    }
}

/// Format a byte count with binary units, e.g. `1.5 MiB`
pub fn format_bytes(size: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;
    const TIB: u64 = GIB * 1024;

    let (unit, divisor) = if size >= TIB {
        ("TiB", TIB)
    } else if size >= GIB {
        ("GiB", GIB)
    } else if size >= MIB {
        ("MiB", MIB)
    } else if size >= KIB {
        ("KiB", KIB)
    } else {
        return format!("{} B", size);
    };

    let scaled = format!("{:.2}", size as f64 / divisor as f64);
    let trimmed = scaled.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, unit)
}

/// Format milliseconds using the two largest non-zero units, e.g. `1 hour 30 minutes`
pub fn format_duration_ms(ms: u64) -> String {
    const UNITS: [(u64, &str); 5] = [
        (24 * 60 * 60 * 1000, "day"),
        (60 * 60 * 1000, "hour"),
        (60 * 1000, "minute"),
        (1000, "second"),
        (1, "millisecond"),
    ];

    if ms == 0 {
        return "0 milliseconds".to_string();
    }

    let mut remaining = ms;
    let mut parts = Vec::new();
    for (size, name) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", count, name, plural));
        }
        if parts.len() == 2 {
            break;
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(
            format_config_value("retention.ms", Some("604800000"), FormatMode::Friendly),
            "7 days"
        );
        assert_eq!(format_duration_ms(5_400_000), "1 hour 30 minutes");
        assert_eq!(format_duration_ms(1), "1 millisecond");
        assert_eq!(format_duration_ms(0), "0 milliseconds");
        // Only the two largest units are kept
        assert_eq!(format_duration_ms(90_061_001), "1 day 1 hour");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(
            format_config_value("segment.bytes", Some("1073741824"), FormatMode::Friendly),
            "1 GiB"
        );
        assert_eq!(format_bytes(1_572_864), "1.5 MiB");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KiB");
    }

    #[test]
    fn test_infinite_sentinel() {
        assert_eq!(
            format_config_value("retention.bytes", Some("-1"), FormatMode::Friendly),
            "Infinite"
        );
        assert_eq!(
            format_config_value("retention.ms", Some("-1"), FormatMode::Friendly),
            "Infinite"
        );
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(
            format_config_value("cleanup.policy", Some("compact,delete"), FormatMode::Friendly),
            "compact,delete"
        );
        assert_eq!(
            format_config_value("retention.ms", Some("soon"), FormatMode::Friendly),
            "soon"
        );
        assert_eq!(
            format_config_value("retention.ms", Some("604800000"), FormatMode::Raw),
            "604800000"
        );
    }

    #[test]
    fn test_missing_value_is_empty() {
        assert_eq!(format_config_value("retention.ms", None, FormatMode::Friendly), "");
        assert_eq!(format_config_value("retention.ms", Some(""), FormatMode::Raw), "");
    }
}
