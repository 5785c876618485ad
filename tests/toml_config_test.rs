use advent_2020::config::toml_config::TomlConfig;
use advent_2020::domain::model::{Answer, Part};
use advent_2020::domain::ports::ConfigProvider;
use advent_2020::utils::validation::Validate;
use advent_2020::{LocalInputStore, LocalStorage, SolvePipeline, SolverEngine};
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_config_drives_a_run() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = temp_dir.path().join("inputs");
    let output = temp_dir.path().join("output");
    std::fs::create_dir_all(inputs.join("day_02")).unwrap();
    std::fs::write(
        inputs.join("day_02/input.txt"),
        "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n",
    )
    .unwrap();

    let normalized = |p: &std::path::Path| p.to_str().unwrap().replace('\\', "/");
    let config_path = temp_dir.path().join("advent.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[run]
days = [2]
parts = [2]

[inputs]
dir = "{}"

[report]
output_path = "{}"
formats = ["json"]

[monitoring]
enabled = false
"#,
            normalized(&inputs),
            normalized(&output)
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.parts(), vec![Part::Two]);
    assert!(!config.monitoring_enabled());

    let store = LocalInputStore::new(config.inputs_dir());
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = SolverEngine::new(SolvePipeline::new(store, storage, config));

    let outcome = engine.run().await.unwrap();
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].answer, Answer::Number(1));
    assert!(output.join("answers.json").exists());
}

#[test]
fn test_unknown_format_fails_validation() {
    let config = TomlConfig::from_toml_str(
        r#"
[report]
formats = ["xml"]
"#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
