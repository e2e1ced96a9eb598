use chrono::NaiveDate;
use loyalty_core_api::domain::Tier;
use loyalty_core_api::error::{ApiError, ApiResult};
use loyalty_core_db::models::event::EventModel;
use loyalty_core_db::repository::create_batch::CreateBatch;
use loyalty_core_db::repository::delete_batch::DeleteBatch;
use loyalty_core_db::repository::exist_by_ids::ExistByIds;
use loyalty_core_db::repository::load_all::LoadAll;
use loyalty_core_db::repository::update_batch::UpdateBatch;
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Form state of the event modal. `id` is set when editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub target_tiers: BTreeSet<Tier>,
}

impl EventDraft {
    pub fn from_event(event: &EventModel) -> Self {
        Self {
            id: Some(event.id),
            name: event.name.clone(),
            description: event.description.clone(),
            date: Some(event.date),
            location: event.location.clone(),
            target_tiers: event.target_tiers.clone(),
        }
    }

    /// Plain set toggle; an empty selection is allowed.
    pub fn toggle_tier(&mut self, tier: Tier) {
        if !self.target_tiers.remove(&tier) {
            self.target_tiers.insert(tier);
        }
    }

    /// Checks name, date and location and builds the event. A new event gets
    /// a fresh id.
    pub fn validate(&self) -> ApiResult<EventModel> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        let Some(date) = self.date.filter(|_| missing.is_empty()) else {
            return Err(ApiError::ValidationError(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        };

        Ok(EventModel {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            date,
            location: self.location.trim().to_string(),
            target_tiers: self.target_tiers.clone(),
        })
    }
}

/// Create, update and delete for the events screen.
pub struct EventsEditor<R: ?Sized> {
    repository: Arc<R>,
}

impl<R> EventsEditor<R>
where
    R: CreateBatch<EventModel>
        + UpdateBatch<EventModel>
        + DeleteBatch
        + ExistByIds
        + LoadAll<EventModel>
        + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Newest first.
    pub async fn list(&self) -> ApiResult<Vec<EventModel>> {
        Ok(self.repository.load_all().await?)
    }

    /// Creates a new event at the top of the list, or replaces the one the
    /// draft was opened from. Editing an event that was deleted meanwhile is
    /// `NotFound`.
    pub async fn save(&self, draft: &EventDraft) -> ApiResult<EventModel> {
        let event = draft.validate()?;
        if draft.id.is_some() {
            let exists = self.repository.exist_by_ids(&[event.id]).await?;
            if !exists.iter().any(|(_, found)| *found) {
                return Err(ApiError::NotFound(format!("event {}", event.id)));
            }
            self.repository.update_batch(vec![event.clone()]).await?;
            tracing::info!(event_id = %event.id, "event updated");
        } else {
            self.repository.create_batch(vec![event.clone()]).await?;
            tracing::info!(event_id = %event.id, "event created");
        }
        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        if self.repository.delete_batch(&[id]).await? == 0 {
            return Err(ApiError::NotFound(format!("event {id}")));
        }
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
