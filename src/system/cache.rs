//! L3 cache size discovery.
//!
//! Linux exposes cache topology under
//! `/sys/devices/system/cpu/cpu0/cache/indexN/` with `level`, `type` and
//! `size` files; `lscpu` is the fallback for kernels without that sysfs
//! tree. Everything degrades to `None`, rendered as "Unknown".

#[cfg(target_os = "linux")]
use std::path::Path;

/// L3 cache size in MiB, or `None` when it cannot be determined
pub fn l3_cache_mb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        read_sysfs("/sys/devices/system/cpu/cpu0/cache").or_else(read_lscpu)
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(target_os = "linux")]
fn read_sysfs<P: AsRef<Path>>(cache_dir: P) -> Option<u64> {
    let entries = std::fs::read_dir(cache_dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Ok(level) = std::fs::read_to_string(path.join("level")) else {
            continue;
        };
        if level.trim() != "3" {
            continue;
        }
        let Ok(size) = std::fs::read_to_string(path.join("size")) else {
            continue;
        };
        if let Some(bytes) = parse_size(size.trim()) {
            return Some(bytes / (1024 * 1024));
        }
    }
    None
}

#[cfg(target_os = "linux")]
fn read_lscpu() -> Option<u64> {
    let out = std::process::Command::new("lscpu").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&out.stdout);
    for line in text.lines() {
        if !line.starts_with("L3 cache") {
            continue;
        }
        let value = line.split_once(':')?.1.trim();
        // "16 MiB", "8192K", possibly "16 MiB (1 instance)"
        let value = value.split('(').next().unwrap_or(value).trim();
        if let Some(bytes) = parse_size(&value.replace(' ', "")) {
            return Some(bytes / (1024 * 1024));
        }
    }
    None
}

/// Parse "32K" / "12M" / "16MiB" / "12288KiB" into bytes
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_size(s: &str) -> Option<u64> {
    let lower = s.to_ascii_lowercase();
    let (digits, multiplier) = if let Some(d) = lower.strip_suffix("kib").or(lower.strip_suffix("k")) {
        (d, 1024u64)
    } else if let Some(d) = lower.strip_suffix("mib").or(lower.strip_suffix("m")) {
        (d, 1024 * 1024)
    } else if let Some(d) = lower.strip_suffix("gib").or(lower.strip_suffix("g")) {
        (d, 1024 * 1024 * 1024)
    } else {
        (lower.as_str(), 1)
    };
    let value: f64 = digits.trim().parse().ok()?;
    Some((value * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kilobyte_suffix() {
        assert_eq!(parse_size("12288K"), Some(12288 * 1024));
        assert_eq!(parse_size("12288KiB"), Some(12288 * 1024));
    }

    #[test]
    fn parses_megabyte_suffix() {
        assert_eq!(parse_size("16M"), Some(16 * 1024 * 1024));
        assert_eq!(parse_size("16MiB"), Some(16 * 1024 * 1024));
    }

    #[test]
    fn parses_fractional_and_plain() {
        assert_eq!(parse_size("0.5M"), Some(512 * 1024));
        assert_eq!(parse_size("4096"), Some(4096));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_size("n/a"), None);
        assert_eq!(parse_size(""), None);
    }
}
