use crate::core::report;
use crate::core::{ConfigProvider, InputStore, Pipeline, ReportStore};
use crate::domain::model::{Day, PuzzleInput, RunReport, Solution};
use crate::puzzles::PuzzleRegistry;
use crate::utils::error::{Result, SolveError};
use std::time::Instant;

pub struct SolvePipeline<I: InputStore, R: ReportStore, C: ConfigProvider> {
    pub(crate) inputs: I,
    pub(crate) reports: R,
    pub(crate) config: C,
    pub(crate) registry: PuzzleRegistry,
}

impl<I: InputStore, R: ReportStore, C: ConfigProvider> SolvePipeline<I, R, C> {
    pub fn new(inputs: I, reports: R, config: C) -> Self {
        Self::with_registry(inputs, reports, config, PuzzleRegistry::default())
    }

    pub fn with_registry(inputs: I, reports: R, config: C, registry: PuzzleRegistry) -> Self {
        Self {
            inputs,
            reports,
            config,
            registry,
        }
    }

    /// 明確指定的日期；未指定時為所有已註冊的謎題
    fn selected_days(&self) -> Result<Vec<Day>> {
        let requested = self.config.days();
        if requested.is_empty() {
            return Ok(self.registry.days());
        }

        let mut days = requested
            .into_iter()
            .map(Day::new)
            .collect::<Result<Vec<_>>>()?;
        days.sort();
        days.dedup();
        for day in &days {
            self.registry.get(*day)?;
        }
        Ok(days)
    }
}

#[async_trait::async_trait]
impl<I: InputStore, R: ReportStore, C: ConfigProvider> Pipeline for SolvePipeline<I, R, C> {
    async fn load_inputs(&self) -> Result<Vec<PuzzleInput>> {
        let explicit = !self.config.days().is_empty();
        let mut loaded = Vec::new();

        for day in self.selected_days()? {
            match self.inputs.read_input(day).await {
                Ok(content) => {
                    tracing::debug!("Loaded input for day {} ({} bytes)", day, content.len());
                    loaded.push(PuzzleInput {
                        day,
                        source: format!("day_{}", day),
                        content,
                    });
                }
                // 執行全部謎題時略過沒有輸入的日期
                Err(SolveError::InputNotFound { path, .. }) if !explicit => {
                    tracing::warn!("⏭️  Skipping day {}: no input at {}", day, path);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(loaded)
    }

    async fn solve(&self, inputs: Vec<PuzzleInput>) -> Result<Vec<Solution>> {
        let parts = self.config.parts();
        let mut solutions = Vec::with_capacity(inputs.len() * parts.len());

        for input in inputs {
            let puzzle = self.registry.get(input.day)?;
            for part in &parts {
                let started = Instant::now();
                let answer = puzzle.solve(*part, &input.content)?;
                let elapsed = started.elapsed();

                tracing::info!(
                    "🧩 Day {} part {} solved in {:?}: {}",
                    input.day,
                    part,
                    elapsed,
                    answer
                );
                solutions.push(Solution {
                    day: input.day,
                    part: *part,
                    title: puzzle.title().to_string(),
                    answer,
                    elapsed,
                });
            }
        }

        Ok(solutions)
    }

    async fn report(&self, report: RunReport) -> Result<Option<String>> {
        for solution in &report.solutions {
            println!("{}", solution);
        }

        let formats = self.config.report_formats();
        if formats.is_empty() {
            return Ok(None);
        }

        let files = report::render(&report, formats)?;
        if self.config.archive_report() {
            let zip_data = report::bundle(&files)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.reports
                .write_file(report::ARCHIVE_NAME, &zip_data)
                .await?;
            return Ok(Some(format!(
                "{}/{}",
                self.config.output_path(),
                report::ARCHIVE_NAME
            )));
        }

        for (name, content) in &files {
            self.reports.write_file(name, content.as_bytes()).await?;
        }
        Ok(Some(self.config.output_path().to_string()))
    }
}
