// Adapters layer: concrete implementations for external systems (local files, http).

pub mod http;
pub mod storage;

use crate::domain::model::Day;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use self::http::{FetchingInputStore, InputFetcher};
use self::storage::LocalInputStore;

/// 依設定組出輸入來源：本機目錄，必要時加上網路下載
pub fn build_input_store<C: ConfigProvider>(
    config: &C,
    explicit_input: Option<(Day, &str)>,
) -> Result<FetchingInputStore<LocalInputStore>> {
    let mut local = LocalInputStore::new(config.inputs_dir());
    if let Some((day, path)) = explicit_input {
        local = local.with_explicit_input(day, path);
    }

    let fetcher = if config.fetch_missing() {
        let session = validate_required_field("session", &config.session_token())?.clone();
        Some(InputFetcher::new(config.base_url(), session))
    } else {
        None
    };

    Ok(FetchingInputStore::new(local, fetcher))
}
