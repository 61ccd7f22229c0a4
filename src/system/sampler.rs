use std::time::Duration;

use sysinfo::System;

use crate::system::cache;
use crate::system::cpu::{clamp_percent, CpuBrand, CpuStatic, UtilizationSample};

/// Source of utilization measurements. The production impl queries the OS
/// via `sysinfo`; tests substitute a stub so timing-sensitive paths can be
/// driven without real hardware deltas.
pub trait UsageProbe: Send + Sync {
    /// Block for roughly `interval` while the OS accumulates usage deltas,
    /// then return one clamped percentage per logical core plus the
    /// aggregate. Never fails: a dead OS query yields a zeroed sample.
    fn sample(&self, interval: Duration) -> UtilizationSample;

    fn logical_cores(&self) -> usize;
}

/// `sysinfo`-backed probe
pub struct SysinfoProbe {
    logical_cores: usize,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        Self {
            logical_cores: sys.cpus().len(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageProbe for SysinfoProbe {
    fn sample(&self, interval: Duration) -> UtilizationSample {
        let mut sys = System::new();

        // Warm-up read: usage counters are deltas, so the first refresh
        // only establishes a baseline and its values are meaningless.
        sys.refresh_cpu_usage();

        std::thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return UtilizationSample::zeroed(self.logical_cores);
        }

        UtilizationSample {
            per_core: cpus.iter().map(|c| clamp_percent(c.cpu_usage())).collect(),
            aggregate: clamp_percent(sys.global_cpu_usage()),
        }
    }

    fn logical_cores(&self) -> usize {
        self.logical_cores
    }
}

/// Read the static CPU facts once, at startup. Every field degrades to a
/// sentinel ("Unknown" / zero) rather than erroring.
pub fn read_static_info() -> CpuStatic {
    let mut sys = System::new();
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    let model = cpus
        .first()
        .map(|c| c.brand().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Unknown CPU".to_string());

    let logical_cores = cpus.len();

    CpuStatic {
        brand: CpuBrand::from_model(&model),
        model,
        physical_cores: sys.physical_core_count().unwrap_or(logical_cores),
        logical_cores,
        frequency_mhz: cpus.first().map(|c| c.frequency()).unwrap_or(0),
        l3_cache_mb: cache::l3_cache_mb(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_core_count() {
        let probe = SysinfoProbe::new();
        assert!(probe.logical_cores() > 0);
    }

    #[test]
    fn static_info_has_model_and_cores() {
        let info = read_static_info();
        assert!(!info.model.is_empty());
        assert!(info.logical_cores > 0);
        assert!(info.physical_cores > 0);
        assert!(info.physical_cores <= info.logical_cores);
    }
}
