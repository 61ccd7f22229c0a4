use std::time::{Duration, Instant};

use cpuscope::system::cpu::UtilizationSample;
use cpuscope::system::sampler::{read_static_info, SysinfoProbe, UsageProbe};

#[test]
fn test_sample_matches_logical_core_count() {
    let probe = SysinfoProbe::new();
    let sample = probe.sample(Duration::from_millis(200));
    assert_eq!(sample.per_core.len(), probe.logical_cores());
}

#[test]
fn test_sample_values_within_bounds() {
    let probe = SysinfoProbe::new();
    let sample = probe.sample(Duration::from_millis(200));
    assert!((0.0..=100.0).contains(&sample.aggregate));
    for (i, usage) in sample.per_core.iter().enumerate() {
        assert!(
            (0.0..=100.0).contains(usage),
            "core {} out of bounds: {}",
            i,
            usage
        );
    }
}

#[test]
fn test_sample_blocks_for_roughly_the_interval() {
    let probe = SysinfoProbe::new();
    let start = Instant::now();
    probe.sample(Duration::from_millis(300));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(250), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(3), "elapsed {:?}", elapsed);
}

#[test]
fn test_zeroed_fallback_shape() {
    let s = UtilizationSample::zeroed(16);
    assert_eq!(s.per_core.len(), 16);
    assert_eq!(s.aggregate, 0.0);
}

#[test]
fn test_static_info_is_populated() {
    let info = read_static_info();
    assert!(!info.model.is_empty());
    assert!(info.logical_cores > 0);
    assert!(info.physical_cores <= info.logical_cores);
}
