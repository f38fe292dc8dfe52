use super::*;

#[test]
fn storage_config_defaults_bucket_when_unset() {
    let cfg = StorageConfig::from_raw(None);
    assert_eq!(cfg.bucket, DEFAULT_STORAGE_BUCKET);
    assert_eq!(cfg.api_base, STORAGE_API_BASE);
}

#[test]
fn storage_config_ignores_blank_bucket() {
    assert_eq!(StorageConfig::from_raw(Some("   ")).bucket, DEFAULT_STORAGE_BUCKET);
}

#[test]
fn storage_config_trims_bucket() {
    assert_eq!(StorageConfig::from_raw(Some(" my-blog.appspot.com ")).bucket, "my-blog.appspot.com");
}

#[test]
fn parse_log_level_accepts_names_case_insensitively() {
    assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
}

#[test]
fn parse_log_level_falls_back_to_info() {
    assert_eq!(parse_log_level(None), log::Level::Info);
    assert_eq!(parse_log_level(Some("loud")), log::Level::Info);
}
