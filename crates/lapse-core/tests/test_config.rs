use lapse_core::config::AlignConfig;

#[test]
fn empty_toml_uses_defaults() {
    let config: AlignConfig = toml::from_str("").unwrap();
    assert!(config.use_window);
    assert!(config.reference_region.is_none());
    assert!(!config.debug.save_correlation);
    assert!(config.debug.output_dir.is_none());
}

#[test]
fn region_round_trips_through_toml() {
    let text = "use_window = false\n\n[reference_region]\nx1 = 2\ny1 = 3\nx2 = 30\ny2 = 20\n";
    let config: AlignConfig = toml::from_str(text).unwrap();
    assert!(!config.use_window);

    let region = config.reference_region.unwrap();
    assert_eq!((region.x1, region.y1, region.x2, region.y2), (2, 3, 30, 20));
}

#[test]
fn default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&AlignConfig::default()).unwrap();
    let parsed: AlignConfig = toml::from_str(&text).unwrap();
    assert!(parsed.use_window);
    assert!(!parsed.debug.save_correlation);
}
