use async_trait::async_trait;
use reqwest::{Client, Url};
use vocab_core::model::{Lesson, UnitId};

use super::payload::LessonPayload;
use super::{CompletionSink, LessonSource};
use crate::config::ApiConfig;
use crate::error::{ApiSetupError, CompletionError, LessonSourceError};

const LESSON_SEGMENT: &str = "lesson";
const COMPLETE_SEGMENT: &str = "complete";

/// `reqwest`-backed lesson backend.
#[derive(Clone, Debug)]
pub struct HttpLessonApi {
    client: Client,
    base_url: Url,
}

impl HttpLessonApi {
    /// Build a client for `config.base_url` with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiSetupError::InvalidBaseUrl` if the base url cannot carry a path,
    /// or `ApiSetupError::Client` if the TLS backend fails to initialise.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiSetupError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|_| {
            ApiSetupError::InvalidBaseUrl {
                raw: config.base_url.clone(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiSetupError::InvalidBaseUrl {
                raw: config.base_url.clone(),
            });
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/api/units/{unit}/{action}`, with the unit escaped as one path segment.
    #[must_use]
    pub fn unit_url(&self, unit: &UnitId, action: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "units", unit.as_str(), action]);
        }
        url
    }
}

#[async_trait]
impl LessonSource for HttpLessonApi {
    async fn fetch_lesson(&self, unit: &UnitId) -> Result<Lesson, LessonSourceError> {
        let response = self
            .client
            .get(self.unit_url(unit, LESSON_SEGMENT))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LessonSourceError::HttpStatus(response.status()));
        }

        let payload: LessonPayload = response.json().await?;
        payload.into_lesson()
    }
}

#[async_trait]
impl CompletionSink for HttpLessonApi {
    async fn notify_completed(&self, unit: &UnitId) -> Result<(), CompletionError> {
        let response = self
            .client
            .post(self.unit_url(unit, COMPLETE_SEGMENT))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
