//! Plain-text report generation and export.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::system::cpu::{CpuStatic, UtilizationSample};

/// Render the report text. Line order is fixed: name, brand, cores,
/// frequency, cache, blank, overall usage, per-core list.
pub fn build_report(info: &CpuStatic, sample: &UtilizationSample) -> String {
    let mut lines = vec![
        format!("CPU: {}", info.model),
        format!("Brand: {}", info.brand.name()),
        format!(
            "Cores: {} physical / {} logical",
            info.physical_cores, info.logical_cores
        ),
        info.frequency_line(),
        info.cache_line(),
        String::new(),
        format!("Overall CPU Usage: {:.1} %", sample.aggregate),
        "Per-core usage:".to_string(),
    ];
    for (i, usage) in sample.per_core.iter().enumerate() {
        lines.push(format!("  Core {}: {:.1} %", i, usage));
    }
    lines.join("\n") + "\n"
}

/// Write the report to `path`. Failures come back as a message for the
/// status line; nothing in memory changes either way.
pub fn save_report(path: &Path, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create report dir: {}", e))?;
        }
    }

    let mut file =
        fs::File::create(path).map_err(|e| format!("Failed to create report file: {}", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write report: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::cpu::CpuBrand;

    fn fixture() -> (CpuStatic, UtilizationSample) {
        let info = CpuStatic {
            model: "AMD Ryzen 7 5800X 8-Core Processor".to_string(),
            brand: CpuBrand::Amd,
            physical_cores: 8,
            logical_cores: 2,
            frequency_mhz: 3800,
            l3_cache_mb: Some(32),
        };
        let sample = UtilizationSample {
            per_core: vec![12.3, 45.6],
            aggregate: 30.5,
        };
        (info, sample)
    }

    #[test]
    fn report_lines_are_verbatim() {
        let (info, sample) = fixture();
        let report = build_report(&info, &sample);
        assert!(report.contains("Overall CPU Usage: 30.5 %"));
        assert!(report.contains("  Core 0: 12.3 %"));
        assert!(report.contains("  Core 1: 45.6 %"));
    }

    #[test]
    fn report_line_order() {
        let (info, sample) = fixture();
        let report = build_report(&info, &sample);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "CPU: AMD Ryzen 7 5800X 8-Core Processor");
        assert_eq!(lines[1], "Brand: AMD");
        assert_eq!(lines[2], "Cores: 8 physical / 2 logical");
        assert_eq!(lines[3], "Frequency: 3800 MHz (3.80 GHz)");
        assert_eq!(lines[4], "L3 Cache: 32 MB");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Overall CPU Usage: 30.5 %");
        assert_eq!(lines[7], "Per-core usage:");
        assert_eq!(lines[8], "  Core 0: 12.3 %");
        assert_eq!(lines[9], "  Core 1: 45.6 %");
    }

    #[test]
    fn unknown_cache_renders_sentinel() {
        let (mut info, sample) = fixture();
        info.l3_cache_mb = None;
        let report = build_report(&info, &sample);
        assert!(report.contains("L3 Cache: Unknown MB"));
    }
}
