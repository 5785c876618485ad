use crate::domain::model::{Answer, Day, Part, PuzzleInput, RunReport, Solution};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputStore: Send + Sync {
    fn read_input(&self, day: Day) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_input(
        &self,
        day: Day,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ReportStore: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// 指定的日期；空代表全部已註冊的謎題
    fn days(&self) -> Vec<u8>;
    fn parts(&self) -> Vec<Part>;
    fn inputs_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_formats(&self) -> &[String];
    fn archive_report(&self) -> bool;
    fn fetch_missing(&self) -> bool;
    fn session_token(&self) -> Option<String>;
    fn base_url(&self) -> &str;
}

/// 每一天的謎題解法。解法只處理字串，不碰檔案系統。
pub trait Puzzle: Send + Sync {
    fn day(&self) -> u8;
    fn title(&self) -> &'static str;
    fn part_one(&self, input: &str) -> Result<Answer>;
    fn part_two(&self, input: &str) -> Result<Answer>;

    fn solve(&self, part: Part, input: &str) -> Result<Answer> {
        match part {
            Part::One => self.part_one(input),
            Part::Two => self.part_two(input),
        }
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load_inputs(&self) -> Result<Vec<PuzzleInput>>;
    async fn solve(&self, inputs: Vec<PuzzleInput>) -> Result<Vec<Solution>>;
    async fn report(&self, report: RunReport) -> Result<Option<String>>;
}
