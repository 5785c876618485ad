use crate::core::Pipeline;
use crate::domain::model::{RunReport, Solution};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 一次執行的結果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub solutions: Vec<Solution>,
    pub report_path: Option<String>,
}

pub struct SolverEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SolverEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let started_at = chrono::Utc::now();
        tracing::info!("🚀 Starting puzzle run");
        self.monitor.log_stats("Start");

        let inputs = self.pipeline.load_inputs().await?;
        tracing::info!("📥 Loaded {} puzzle inputs", inputs.len());
        self.monitor.log_stats("Load");
        if inputs.is_empty() {
            tracing::warn!("No puzzle inputs found, nothing to solve");
        }

        let solutions = self.pipeline.solve(inputs).await?;
        tracing::info!("🧮 Solved {} puzzle parts", solutions.len());
        self.monitor.log_stats("Solve");

        let report_path = self
            .pipeline
            .report(RunReport {
                solutions: solutions.clone(),
                started_at,
            })
            .await?;
        if let Some(path) = &report_path {
            tracing::info!("📁 Report saved to: {}", path);
        }
        self.monitor.log_final_stats();

        Ok(RunOutcome {
            solutions,
            report_path,
        })
    }
}
