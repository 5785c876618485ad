use advent_2020::adapters::build_input_store;
use advent_2020::config::toml_config::TomlConfig;
use advent_2020::domain::model::Day;
use advent_2020::domain::ports::ConfigProvider;
use advent_2020::utils::error::ErrorSeverity;
use advent_2020::utils::{logger, validation::Validate};
use advent_2020::{LocalInputStore, LocalStorage, PuzzleRegistry, SolvePipeline, SolverEngine};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-solver")]
#[command(about = "Solve puzzles using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "advent.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the days from config (comma separated)
    #[arg(long, value_delimiter = ',')]
    day: Vec<u8>,

    /// Dry run - show which inputs would be solved without solving them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.log_level() == Some("debug");
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if !args.day.is_empty() {
        config.run.days = args.day.clone();
        tracing::info!("🔧 Days overridden to: {:?}", config.run.days);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No puzzles will be solved");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let inputs = build_input_store(&config, None)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SolvePipeline::new(inputs, storage, config);
    let engine = SolverEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Solved {} puzzle parts", outcome.solutions.len());
            if let Some(path) = outcome.report_path {
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

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

fn display_config_summary(config: &TomlConfig) {
    let days = if config.run.days.is_empty() {
        "all".to_string()
    } else {
        format!("{:?}", config.run.days)
    };
    println!("📋 Configuration Summary:");
    println!("  Days: {}", days);
    println!("  Parts: {:?}", config.parts());
    println!("  Inputs: {}", config.inputs_dir());
    println!("  Output: {}", config.output_path());
    if !config.report_formats().is_empty() {
        println!("  Formats: {}", config.report_formats().join(", "));
    }
    println!("  Fetch missing inputs: {}", config.fetch_missing());
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let registry = PuzzleRegistry::default();
    let store = LocalInputStore::new(config.inputs_dir());

    let days = if config.run.days.is_empty() {
        registry.days()
    } else {
        config
            .run
            .days
            .iter()
            .map(|d| Day::new(*d))
            .collect::<Result<Vec<_>, _>>()?
    };

    println!("🔍 Dry run:");
    for day in days {
        let puzzle = registry.get(day)?;
        let (path, status) = match store.existing_input(day) {
            Some(path) => (path, "input found"),
            None if config.fetch_missing() => (store.input_path(day), "will download"),
            None => (store.input_path(day), "input missing"),
        };
        println!("  Day {} {}: {} ({})", day, puzzle.title(), path.display(), status);
    }
    Ok(())
}
