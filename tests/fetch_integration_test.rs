use advent_2020::adapters::build_input_store;
use advent_2020::domain::model::{Answer, Day};
use advent_2020::domain::ports::InputStore;
use advent_2020::{CliConfig, LocalStorage, SolveError, SolvePipeline, SolverEngine};
use httpmock::prelude::*;
use tempfile::TempDir;

fn fetch_config(server: &MockServer, inputs: &TempDir, output: &TempDir) -> CliConfig {
    CliConfig {
        inputs_dir: inputs.path().to_str().unwrap().to_string(),
        output_path: output.path().to_str().unwrap().to_string(),
        fetch: true,
        session: Some("test-session".to_string()),
        base_url: server.base_url(),
        ..CliConfig::default()
    }
}

#[tokio::test]
async fn test_missing_input_is_downloaded_and_saved() {
    let server = MockServer::start();
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let input_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/2020/day/5/input")
            .header("cookie", "session=test-session");
        then.status(200).body("BFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n");
    });

    let mut config = fetch_config(&server, &inputs, &output);
    config.day = vec![5];
    config.part = vec![1];

    let store = build_input_store(&config, None).unwrap();
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = SolverEngine::new(SolvePipeline::new(store, storage, config));

    let outcome = engine.run().await.unwrap();
    input_mock.assert();
    assert_eq!(outcome.solutions[0].answer, Answer::Number(820));

    let saved = std::fs::read_to_string(inputs.path().join("day_05/input.txt")).unwrap();
    assert!(saved.starts_with("BFFFBBFRRR"));
}

#[tokio::test]
async fn test_local_input_skips_download() {
    let server = MockServer::start();
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(inputs.path().join("day_01.txt"), "1721\n979\n366\n299\n675\n1456\n").unwrap();

    let input_mock = server.mock(|when, then| {
        when.method(GET).path("/2020/day/1/input");
        then.status(200).body("0\n");
    });

    let config = fetch_config(&server, &inputs, &output);
    let store = build_input_store(&config, None).unwrap();

    let content = store.read_input(Day::new(1).unwrap()).await.unwrap();
    assert!(content.starts_with("1721"));
    input_mock.assert_hits(0);
}

#[tokio::test]
async fn test_rejected_session_is_fetch_error() {
    let server = MockServer::start();
    let inputs = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let input_mock = server.mock(|when, then| {
        when.method(GET).path("/2020/day/16/input");
        then.status(400)
            .body("Puzzle inputs differ by user.  Please log in to get your puzzle input.");
    });

    let config = fetch_config(&server, &inputs, &output);
    let store = build_input_store(&config, None).unwrap();

    let err = store.read_input(Day::new(16).unwrap()).await.unwrap_err();
    input_mock.assert();
    assert!(matches!(err, SolveError::FetchError { day: 16, status: 400 }));
    assert!(!inputs.path().join("day_16/input.txt").exists());
}
