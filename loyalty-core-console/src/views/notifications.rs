use chrono::NaiveDate;
use loyalty_core_api::domain::{Audience, Tier};
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::notification::NotificationModel;
use loyalty_core_db::repository::create_batch::CreateBatch;
use loyalty_core_db::repository::load_all::LoadAll;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub audience: Audience,
}

/// Notification form plus the sent history it appends to.
pub struct NotificationComposer<R: ?Sized> {
    repository: Arc<R>,
    draft: NotificationDraft,
}

impl<R> NotificationComposer<R>
where
    R: CreateBatch<NotificationModel> + LoadAll<NotificationModel> + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            draft: NotificationDraft::default(),
        }
    }

    pub fn draft(&self) -> &NotificationDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    pub fn toggle_tier(&mut self, tier: Tier) {
        self.draft.audience = self.draft.audience.toggle(tier);
    }

    pub fn select_all(&mut self) {
        self.draft.audience.select_all();
    }

    /// Sent notifications, newest first.
    pub async fn history(&self) -> ApiResult<Vec<NotificationModel>> {
        Ok(self.repository.load_all().await?)
    }

    /// Sends the draft dated `today` and clears the form. An invalid draft
    /// is kept for correction.
    pub async fn send(&mut self, today: NaiveDate) -> ApiResult<NotificationModel> {
        if self.draft.title.trim().is_empty() || self.draft.message.trim().is_empty() {
            return Err(ApiError::ValidationError(
                "title and message cannot be empty".to_string(),
            ));
        }

        let notification = NotificationModel {
            id: Uuid::new_v4(),
            title: self.draft.title.trim().to_string(),
            message: self.draft.message.trim().to_string(),
            sent_date: today,
            target_tiers: self.draft.audience.clone(),
        };
        self.repository.create_batch(vec![notification.clone()]).await?;
        self.draft = NotificationDraft::default();

        tracing::info!(
            notification_id = %notification.id,
            audience = %notification.target_tiers.label(),
            "notification sent"
        );
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::date;
    use loyalty_core_memory::fixtures::notifications::notifications;
    use loyalty_core_memory::{MemoryRepository, SimulatedLatency};

    fn composer() -> NotificationComposer<MemoryRepository<NotificationModel>> {
        NotificationComposer::new(Arc::new(MemoryRepository::with_items(
            "notification",
            SimulatedLatency::none(),
            notifications(),
        )))
    }

    #[test]
    fn test_audience_toggling_through_the_draft() {
        let mut composer = composer();
        assert!(composer.draft().audience.is_all());

        composer.toggle_tier(Tier::Diamond);
        assert_eq!(composer.draft().audience, Audience::from_tiers([Tier::Diamond]));

        composer.toggle_tier(Tier::Diamond);
        assert!(composer.draft().audience.is_all());

        composer.toggle_tier(Tier::Gold);
        composer.select_all();
        assert!(composer.draft().audience.is_all());
    }

    #[tokio::test]
    async fn test_send_prepends_and_resets() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut composer = composer();
        composer.set_title("Flash sale");
        composer.set_message("Double points this weekend");
        composer.toggle_tier(Tier::Gold);

        let sent = composer.send(date(2024, 6, 7)).await?;
        assert_eq!(sent.sent_date, date(2024, 6, 7));
        assert_eq!(sent.target_tiers, Audience::from_tiers([Tier::Gold]));

        let history = composer.history().await?;
        assert_eq!(history[0].id, sent.id);
        assert_eq!(history.len(), notifications().len() + 1);
        assert_eq!(composer.draft(), &NotificationDraft::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_send_rejects_blank_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut composer = composer();
        composer.set_title("Only a title");
        composer.set_message("   ");

        let result = composer.send(date(2024, 6, 7)).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(composer.draft().title, "Only a title");
        assert_eq!(composer.history().await?.len(), notifications().len());
        Ok(())
    }
}
