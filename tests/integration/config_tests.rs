//! Integration tests for configuration ports.

use super::mock_ports::MemoryConfig;

use vpet::adapters::config_file::JsonConfigFile;
use vpet::app::ports::{ConfigError, ConfigPort};
use vpet::config::SessionConfig;

#[test]
fn memory_port_rejects_invalid_config() {
    let port = MemoryConfig::empty();
    assert_eq!(port.load(), Err(ConfigError::NotFound));

    let bad = SessionConfig {
        default_name: " ".into(),
        ..SessionConfig::default()
    };
    assert!(matches!(port.save(&bad), Err(ConfigError::ValidationFailed(_))));
    assert_eq!(port.load(), Err(ConfigError::NotFound));

    port.save(&SessionConfig::default()).unwrap();
    assert_eq!(port.load(), Ok(SessionConfig::default()));
}

#[test]
fn file_port_reads_partial_documents() {
    let path = std::env::temp_dir().join(format!("vpet-it-partial-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "default_name": "Pip" }"#).unwrap();

    let cfg = JsonConfigFile::new(&path).load().unwrap();
    assert_eq!(cfg.default_name, "Pip");
    assert_eq!(cfg.log_filter, "warn");
    assert!(cfg.show_banner);

    let _ = std::fs::remove_file(path);
}
