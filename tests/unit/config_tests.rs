use clap::Parser;

use person_pipeline::config::OutputFormatConfig;
use person_pipeline::{Cli, Config, ConfigManager, EnvProvider};

use crate::common::test_helpers::write_temp_file;

struct FixedEnv(Vec<(&'static str, &'static str)>);

impl EnvProvider for FixedEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output.format, OutputFormatConfig::Human);
    assert_eq!(config.logging.level, "warn");
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[tokio::test]
async fn test_load_config_from_explicit_file() {
    let (_dir, path) = write_temp_file(
        "pipeline.toml",
        "[output]\nformat = \"json\"\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "person-pipeline",
        "--config",
        path.to_str().unwrap(),
        "validate",
        "--name",
        "Joao",
    ])
    .unwrap();

    let config = ConfigManager::load_config(&cli).await.unwrap();
    assert_eq!(config.output.format, OutputFormatConfig::Json);
}

#[tokio::test]
async fn test_cli_flags_override_file() {
    let (_dir, path) = write_temp_file("pipeline.json", r#"{"output": {"quiet": true}}"#).unwrap();

    let cli = Cli::try_parse_from([
        "person-pipeline",
        "--config",
        path.to_str().unwrap(),
        "-v",
        "process",
    ])
    .unwrap();

    let config = ConfigManager::load_config(&cli).await.unwrap();
    assert!(config.output.verbose);
    assert!(!config.output.quiet);
}

#[test]
fn test_environment_layer() {
    let env = FixedEnv(vec![
        ("PERSON_PIPELINE_FORMAT", "json"),
        ("PERSON_PIPELINE_QUIET", "true"),
    ]);

    let config = ConfigManager::apply_environment_overrides_with(&env, Config::default()).unwrap();

    assert_eq!(config.output.format, OutputFormatConfig::Json);
    assert!(config.output.quiet);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let env = FixedEnv(vec![("PERSON_PIPELINE_LOG_LEVEL", "chatty")]);
    let config = ConfigManager::apply_environment_overrides_with(&env, Config::default()).unwrap();

    assert!(ConfigManager::validate_config(&config).is_err());
}
