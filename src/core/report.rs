use crate::domain::model::RunReport;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const ARCHIVE_NAME: &str = "answers.zip";

/// 報表檔名，依格式決定
pub fn file_name(format: &str) -> String {
    format!("answers.{}", format)
}

/// 以指定分隔符號輸出表格（csv 用 ','，tsv 用 '\t'）
pub fn to_delimited(report: &RunReport, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["day", "part", "title", "answer", "elapsed_us", "solved_at"])?;
    let solved_at = report.started_at.to_rfc3339();
    for solution in &report.solutions {
        writer.write_record([
            solution.day.number().to_string(),
            solution.part.number().to_string(),
            solution.title.clone(),
            solution.answer.to_string(),
            solution.elapsed.as_micros().to_string(),
            solved_at.clone(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

pub fn to_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 依格式產生 (檔名, 內容)；未知格式已在設定驗證時擋下
pub fn render(report: &RunReport, formats: &[String]) -> Result<Vec<(String, String)>> {
    let mut files = Vec::with_capacity(formats.len());
    for format in formats {
        let content = match format.as_str() {
            "csv" => to_delimited(report, b',')?,
            "tsv" => to_delimited(report, b'\t')?,
            "json" => to_json(report)?,
            other => {
                tracing::warn!("Skipping unsupported report format '{}'", other);
                continue;
            }
        };
        files.push((file_name(format), content));
    }
    Ok(files)
}

/// 打包成單一 ZIP
pub fn bundle(files: &[(String, String)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, content) in files {
        zip.start_file(name.as_str(), SimpleFileOptions::default())?;
        zip.write_all(content.as_bytes())?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
