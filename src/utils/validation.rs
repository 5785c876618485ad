use crate::utils::error::{Result, SolveError};
use url::Url;

pub const REPORT_FORMATS: [&str; 3] = ["csv", "tsv", "json"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> SolveError {
    SolveError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 下載輸入用的站點位址，只接受 http(s) 且需有主機
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str.trim())
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field_name, url_str, "URL has no host"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<()> {
    match formats
        .iter()
        .find(|f| !REPORT_FORMATS.contains(&f.as_str()))
    {
        Some(unknown) => Err(invalid(
            field_name,
            unknown,
            format!(
                "Unsupported format. Valid formats: {}",
                REPORT_FORMATS.join(", ")
            ),
        )),
        None => Ok(()),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SolveError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://adventofcode.com").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "adventofcode").is_err());
        assert!(validate_url("base_url", "ftp://adventofcode.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("day", 1u8, 1, 25).is_ok());
        assert!(validate_range("day", 25u8, 1, 25).is_ok());
        assert!(validate_range("day", 0u8, 1, 25).is_err());
        assert!(validate_range("part", 3u8, 1, 2).is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_formats("formats", &formats).is_ok());
        assert!(validate_formats("formats", &["xml".to_string()]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let token: Option<String> = None;
        assert!(matches!(
            validate_required_field("session", &token),
            Err(SolveError::MissingConfigError { .. })
        ));
    }
}
