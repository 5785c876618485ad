use crate::domain::model::Day;
use crate::domain::ports::InputStore;
use crate::utils::error::{Result, SolveError};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const EVENT_YEAR: u16 = 2020;

/// 以 session cookie 下載謎題輸入
#[derive(Debug, Clone)]
pub struct InputFetcher {
    client: Client,
    base_url: String,
    session: String,
}

impl InputFetcher {
    pub fn new(base_url: &str, session: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn input_url(&self, day: Day) -> String {
        format!(
            "{}/{}/day/{}/input",
            self.base_url,
            EVENT_YEAR,
            day.number()
        )
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let cookie = HeaderValue::from_str(&format!("session={}", self.session)).map_err(|e| {
            SolveError::InvalidConfigValueError {
                field: "session".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("not a valid header value: {}", e),
            }
        })?;
        headers.insert(COOKIE, cookie);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("advent-2020/", env!("CARGO_PKG_VERSION"))),
        );
        Ok(headers)
    }

    pub async fn fetch(&self, day: Day) -> Result<String> {
        let url = self.input_url(day);
        tracing::info!("🌐 Downloading input for day {} from {}", day, url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await?;

        tracing::debug!("Input response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SolveError::FetchError {
                day: day.number(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// 本機找不到輸入時改從網路下載，並存回本機
pub struct FetchingInputStore<S: InputStore> {
    inner: S,
    fetcher: Option<InputFetcher>,
}

impl<S: InputStore> FetchingInputStore<S> {
    pub fn new(inner: S, fetcher: Option<InputFetcher>) -> Self {
        Self { inner, fetcher }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: InputStore> InputStore for FetchingInputStore<S> {
    async fn read_input(&self, day: Day) -> Result<String> {
        match (self.inner.read_input(day).await, &self.fetcher) {
            (Err(SolveError::InputNotFound { .. }), Some(fetcher)) => {
                let content = fetcher.fetch(day).await?;
                self.inner.write_input(day, &content).await?;
                Ok(content)
            }
            (result, _) => result,
        }
    }

    async fn write_input(&self, day: Day, content: &str) -> Result<()> {
        self.inner.write_input(day, content).await
    }
}
