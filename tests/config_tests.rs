use std::path::PathBuf;

use cpuscope::color_scheme::ColorSchemeId;
use cpuscope::config::Config;

#[test]
fn test_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.sample_interval_ms, 500);
    assert_eq!(cfg.auto_interval_ms, 5000);
    assert!(!cfg.auto_refresh_on_start);
    assert_eq!(cfg.report_path, PathBuf::from("cpu_report.txt"));
    assert_eq!(cfg.color_scheme_id, ColorSchemeId::Default);
}

#[test]
fn test_parse_round_trip() {
    let cfg = Config {
        sample_interval_ms: 250,
        auto_interval_ms: 10000,
        auto_refresh_on_start: true,
        report_path: PathBuf::from("/tmp/report.txt"),
        color_scheme_id: ColorSchemeId::Monochrome,
    };
    let parsed = Config::parse(&cfg.render());
    assert_eq!(parsed, cfg);
}

#[test]
fn test_parse_clamps_intervals() {
    let cfg = Config::parse("sample_interval_ms=1\nauto_interval_ms=999999\n");
    assert_eq!(cfg.sample_interval_ms, 100);
    assert_eq!(cfg.auto_interval_ms, 60000);
}

#[test]
fn test_parse_ignores_unknown_keys_and_comments() {
    let content = "\
# a comment
unknown_key=42
sample_interval_ms=750

auto_refresh_on_start=1
";
    let cfg = Config::parse(content);
    assert_eq!(cfg.sample_interval_ms, 750);
    assert!(cfg.auto_refresh_on_start);
    assert_eq!(cfg.auto_interval_ms, 5000);
}

#[test]
fn test_parse_garbage_yields_defaults() {
    let cfg = Config::parse("sample_interval_ms=abc\ncolor_scheme=notanumber\n===\n");
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_out_of_range_scheme_index_falls_back() {
    let cfg = Config::parse("color_scheme=99\n");
    assert_eq!(cfg.color_scheme_id, ColorSchemeId::Default);
}
