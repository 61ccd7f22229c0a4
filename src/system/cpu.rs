/// CPU vendor family, derived from the model name string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuBrand {
    Intel,
    Amd,
    #[default]
    Unknown,
}

impl CpuBrand {
    /// Map a raw model name ("AMD Ryzen 7 5800X 8-Core Processor") to a family
    pub fn from_model(model: &str) -> Self {
        if model.contains("Intel") {
            CpuBrand::Intel
        } else if model.contains("AMD") {
            CpuBrand::Amd
        } else {
            CpuBrand::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CpuBrand::Intel => "Intel",
            CpuBrand::Amd => "AMD",
            CpuBrand::Unknown => "Unknown",
        }
    }
}

/// Static CPU facts, read once at startup
#[derive(Debug, Clone, Default)]
pub struct CpuStatic {
    pub model: String,
    pub brand: CpuBrand,
    pub physical_cores: usize,
    pub logical_cores: usize,
    /// Current frequency in MHz; 0 when the OS reports nothing
    pub frequency_mhz: u64,
    /// L3 cache size in MiB; None when discovery failed
    pub l3_cache_mb: Option<u64>,
}

impl CpuStatic {
    /// "Frequency: 4550 MHz (4.55 GHz)" or "Frequency: Unknown"
    pub fn frequency_line(&self) -> String {
        if self.frequency_mhz == 0 {
            "Frequency: Unknown".to_string()
        } else {
            format!(
                "Frequency: {} MHz ({:.2} GHz)",
                self.frequency_mhz,
                self.frequency_mhz as f64 / 1000.0
            )
        }
    }

    /// "L3 Cache: 32 MB" or "L3 Cache: Unknown MB"
    pub fn cache_line(&self) -> String {
        match self.l3_cache_mb {
            Some(mb) => format!("L3 Cache: {} MB", mb),
            None => "L3 Cache: Unknown MB".to_string(),
        }
    }
}

/// One utilization measurement: per-core plus aggregate, all in [0, 100]
#[derive(Debug, Clone, Default)]
pub struct UtilizationSample {
    pub per_core: Vec<f32>,
    pub aggregate: f32,
}

impl UtilizationSample {
    /// Degraded fallback when the OS query yields nothing
    pub fn zeroed(logical_cores: usize) -> Self {
        Self {
            per_core: vec![0.0; logical_cores],
            aggregate: 0.0,
        }
    }
}

/// Clamp a raw percentage into [0, 100]; NaN maps to 0
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
