use advent_2020::adapters::build_input_store;
use advent_2020::domain::model::Day;
use advent_2020::utils::error::ErrorSeverity;
use advent_2020::utils::{logger, validation::Validate};
use advent_2020::{CliConfig, LocalStorage, PuzzleRegistry, SolvePipeline, SolverEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.list {
        list_puzzles();
        return Ok(());
    }

    tracing::debug!(
        "CLI config: days={:?} parts={:?} inputs_dir={} formats={:?} fetch={}",
        config.day,
        config.part,
        config.inputs_dir,
        config.formats,
        config.fetch
    );

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let explicit_input = match (&config.input, config.day.as_slice()) {
        (Some(path), [day]) => Some((Day::new(*day)?, path.as_str())),
        _ => None,
    };
    let inputs = build_input_store(&config, explicit_input)?;
    let storage = LocalStorage::new(config.output_path.clone());

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = SolvePipeline::new(inputs, storage, config);
    let engine = SolverEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Solved {} puzzle parts", outcome.solutions.len());
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn list_puzzles() {
    println!("📋 Available puzzles:");
    for puzzle in PuzzleRegistry::default().iter() {
        println!("  Day {:02}: {}", puzzle.day(), puzzle.title());
    }
}
