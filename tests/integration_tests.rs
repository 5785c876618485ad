use advent_2020::adapters::build_input_store;
use advent_2020::domain::model::{Answer, Day, Part};
use advent_2020::{CliConfig, LocalStorage, SolveError, SolvePipeline, SolverEngine};
use std::io::Read;
use tempfile::TempDir;

const REPORT_REPAIR: &str = "1721\n979\n366\n299\n675\n1456\n";
const HANDHELD_HALTING: &str = "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6\n";

fn write_input(dir: &TempDir, day: u8, content: &str) {
    let day_dir = dir.path().join(format!("day_{:02}", day));
    std::fs::create_dir_all(&day_dir).unwrap();
    std::fs::write(day_dir.join("input.txt"), content).unwrap();
}

fn config(inputs: &TempDir, output: &TempDir) -> CliConfig {
    CliConfig {
        inputs_dir: inputs.path().to_str().unwrap().to_string(),
        output_path: output.path().to_str().unwrap().to_string(),
        ..CliConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_solves_available_inputs() {
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(&inputs, 1, REPORT_REPAIR);
    write_input(&inputs, 8, HANDHELD_HALTING);

    let mut config = config(&inputs, &output);
    config.formats = vec!["csv".to_string(), "json".to_string()];

    let store = build_input_store(&config, None).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = SolvePipeline::new(store, storage, config);
    let engine = SolverEngine::new_with_monitoring(pipeline, false);

    let outcome = engine.run().await.unwrap();

    let answers: Vec<(u8, Part, Answer)> = outcome
        .solutions
        .iter()
        .map(|s| (s.day.number(), s.part, s.answer.clone()))
        .collect();
    assert_eq!(
        answers,
        vec![
            (1, Part::One, Answer::Number(514579)),
            (1, Part::Two, Answer::Number(241861950)),
            (8, Part::One, Answer::Number(5)),
            (8, Part::Two, Answer::Number(8)),
        ]
    );

    let report_path = outcome.report_path.unwrap();
    assert_eq!(report_path, output.path().to_str().unwrap());

    let csv = std::fs::read_to_string(output.path().join("answers.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("8,2,Handheld Halting,8,"));

    let json = std::fs::read_to_string(output.path().join("answers.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["solutions"][0]["answer"], 514579);
    assert!(!output.path().join("answers.tsv").exists());
}

#[tokio::test]
async fn test_explicit_input_file_and_archive() {
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let file = inputs.path().join("navigation.txt");
    std::fs::write(&file, "F10\nN3\nF7\nR90\nF11\n").unwrap();

    let mut config = config(&inputs, &output);
    config.day = vec![12];
    config.part = vec![2];
    config.formats = vec!["tsv".to_string()];
    config.archive = true;

    let day = Day::new(12).unwrap();
    let store = build_input_store(&config, Some((day, file.to_str().unwrap()))).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SolverEngine::new(SolvePipeline::new(store, storage, config));

    let outcome = engine.run().await.unwrap();
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].answer, Answer::Number(286));
    assert!(outcome.report_path.unwrap().ends_with("answers.zip"));

    let zip_data = std::fs::read(output.path().join("answers.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 1);

    let mut tsv = String::new();
    archive
        .by_name("answers.tsv")
        .unwrap()
        .read_to_string(&mut tsv)
        .unwrap();
    assert!(tsv.contains("12\t2\tRain Risk\t286\t"));
}

#[tokio::test]
async fn test_requested_day_without_input_fails() {
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let mut config = config(&inputs, &output);
    config.day = vec![17];

    let store = build_input_store(&config, None).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SolverEngine::new(SolvePipeline::new(store, storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, SolveError::InputNotFound { day: 17, .. }));
    assert!(err.recovery_suggestion().contains("day_17"));
}

#[tokio::test]
async fn test_malformed_input_reports_line() {
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(&inputs, 18, "1 + 2\n(3 * 4\n");

    let mut config = config(&inputs, &output);
    config.day = vec![18];

    let store = build_input_store(&config, None).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SolverEngine::new(SolvePipeline::new(store, storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, SolveError::ParseError { day: 18, line: 2, .. }));
    assert!(!std::fs::read_dir(output.path()).unwrap().any(|_| true));
}
