use crate::domain::model::Day;
use crate::domain::ports::{InputStore, ReportStore};
use crate::utils::error::{Result, SolveError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 從本機目錄讀取謎題輸入：`<dir>/day_NN/input.txt` 或 `<dir>/day_NN.txt`
#[derive(Debug, Clone)]
pub struct LocalInputStore {
    base_path: PathBuf,
    explicit: Option<(Day, PathBuf)>,
}

impl LocalInputStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            explicit: None,
        }
    }

    /// 指定某一天使用的輸入檔，優先於目錄規則
    pub fn with_explicit_input(mut self, day: Day, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some((day, path.into()));
        self
    }

    pub fn input_path(&self, day: Day) -> PathBuf {
        if let Some((explicit_day, path)) = &self.explicit {
            if *explicit_day == day {
                return path.clone();
            }
        }
        self.base_path
            .join(format!("day_{}", day))
            .join("input.txt")
    }

    fn flat_path(&self, day: Day) -> PathBuf {
        self.base_path.join(format!("day_{}.txt", day))
    }

    /// 第一個存在的輸入檔，與實際讀取時的順序相同
    pub fn existing_input(&self, day: Day) -> Option<PathBuf> {
        self.candidate_paths(day).into_iter().find(|path| path.is_file())
    }

    /// 依序嘗試讀取的路徑
    pub fn candidate_paths(&self, day: Day) -> Vec<PathBuf> {
        match &self.explicit {
            Some((explicit_day, path)) if *explicit_day == day => vec![path.clone()],
            _ => vec![self.input_path(day), self.flat_path(day)],
        }
    }
}

impl InputStore for LocalInputStore {
    async fn read_input(&self, day: Day) -> Result<String> {
        for path in self.candidate_paths(day) {
            match fs::read_to_string(&path).await {
                Ok(content) => {
                    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
                    return Ok(content);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(SolveError::InputReadError {
                        day: day.number(),
                        path: path.display().to_string(),
                        source,
                    })
                }
            }
        }

        Err(SolveError::InputNotFound {
            day: day.number(),
            path: self.input_path(day).display().to_string(),
        })
    }

    async fn write_input(&self, day: Day, content: &str) -> Result<()> {
        let path = self.input_path(day);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await?;
        tracing::debug!("Saved input for day {} to {}", day, path.display());
        Ok(())
    }
}

/// 報表輸出目錄
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl ReportStore for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_nested_and_flat_layouts() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalInputStore::new(temp_dir.path());

        std::fs::create_dir_all(temp_dir.path().join("day_01")).unwrap();
        std::fs::write(temp_dir.path().join("day_01/input.txt"), "1721\n").unwrap();
        std::fs::write(temp_dir.path().join("day_02.txt"), "1-3 a: abcde\n").unwrap();

        let day1 = Day::new(1).unwrap();
        let day2 = Day::new(2).unwrap();
        assert_eq!(store.read_input(day1).await.unwrap(), "1721\n");
        assert_eq!(store.read_input(day2).await.unwrap(), "1-3 a: abcde\n");
    }

    #[test]
    fn test_candidate_paths() {
        let store = LocalInputStore::new("inputs");
        let day = Day::new(2).unwrap();
        assert_eq!(
            store.candidate_paths(day),
            vec![
                PathBuf::from("inputs").join("day_02").join("input.txt"),
                PathBuf::from("inputs").join("day_02.txt"),
            ]
        );

        let store = store.with_explicit_input(day, "mine.txt");
        assert_eq!(store.candidate_paths(day), vec![PathBuf::from("mine.txt")]);
    }

    #[test]
    fn test_existing_input_finds_flat_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalInputStore::new(temp_dir.path());
        let day = Day::new(11).unwrap();
        assert_eq!(store.existing_input(day), None);

        std::fs::write(temp_dir.path().join("day_11.txt"), "L.LL\n").unwrap();
        assert_eq!(store.existing_input(day), Some(temp_dir.path().join("day_11.txt")));

        std::fs::create_dir_all(temp_dir.path().join("day_11")).unwrap();
        std::fs::write(temp_dir.path().join("day_11/input.txt"), "L.LL\n").unwrap();
        assert_eq!(store.existing_input(day), Some(store.input_path(day)));
    }

    #[tokio::test]
    async fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalInputStore::new(temp_dir.path());

        let err = store.read_input(Day::new(5).unwrap()).await.unwrap_err();
        assert!(matches!(err, SolveError::InputNotFound { day: 5, .. }));
    }

    #[tokio::test]
    async fn test_explicit_input_overrides_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mine.txt");
        std::fs::write(&file, "F10\n").unwrap();

        let day = Day::new(12).unwrap();
        let store = LocalInputStore::new("does-not-exist").with_explicit_input(day, &file);
        assert_eq!(store.read_input(day).await.unwrap(), "F10\n");
        assert_eq!(store.input_path(day), file);
    }

    #[tokio::test]
    async fn test_unreadable_input_is_an_input_error() {
        let temp_dir = TempDir::new().unwrap();
        // 目錄佔用了輸入檔的位置，讀取會失敗但不是 NotFound
        std::fs::create_dir_all(temp_dir.path().join("day_05/input.txt")).unwrap();
        let store = LocalInputStore::new(temp_dir.path());

        let err = store.read_input(Day::new(5).unwrap()).await.unwrap_err();
        assert!(matches!(err, SolveError::InputReadError { day: 5, .. }));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Input);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalInputStore::new(temp_dir.path());
        let day = Day::new(8).unwrap();

        store.write_input(day, "nop +0\n").await.unwrap();
        assert!(temp_dir.path().join("day_08/input.txt").exists());
        assert_eq!(store.read_input(day).await.unwrap(), "nop +0\n");
    }
}
