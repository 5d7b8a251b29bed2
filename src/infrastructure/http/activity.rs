//! HTTP implementation of the activity repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::ApiClient;
use crate::api::dto::{ApiEnvelope, UserActivityStatusDto};
use crate::domain::entities::UserActivity;
use crate::domain::repositories::ActivityRepository;
use crate::error::AppError;

pub struct HttpActivityRepository {
    client: Arc<ApiClient>,
}

impl HttpActivityRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityRepository for HttpActivityRepository {
    async fn all_statuses(&self) -> Result<Vec<UserActivity>, AppError> {
        let envelope: ApiEnvelope<Vec<UserActivityStatusDto>> = self
            .client
            .get(&["api", "user-activity", "all-status"], &[])
            .await?;

        Ok(envelope
            .into_payload_or_default()
            .into_iter()
            .map(UserActivity::from)
            .collect())
    }
}
