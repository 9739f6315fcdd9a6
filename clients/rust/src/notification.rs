use crate::{APIResponse, BaseClient};
use medtrack_notifier_api_structs::*;
use medtrack_notifier_domain::EntryId;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct AddNotificationInput {
    pub kind: String,
    pub title: String,
    pub body: String,
    pub action_target: Option<String>,
    pub action_label: Option<String>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn add(
        &self,
        input: AddNotificationInput,
    ) -> APIResponse<add_notification::APIResponse> {
        let body = add_notification::RequestBody {
            kind: input.kind,
            title: input.title,
            body: input.body,
            action_target: input.action_target,
            action_label: input.action_label,
            medication_id: None,
            reminder_id: None,
        };
        self.base
            .post(Some(body), "notifications".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_notifications::APIResponse> {
        self.base
            .get("notifications".into(), StatusCode::OK)
            .await
    }

    pub async fn unread_count(&self) -> APIResponse<get_unread_count::APIResponse> {
        self.base
            .get("notifications/unread".into(), StatusCode::OK)
            .await
    }

    pub async fn mark_read(
        &self,
        notification_id: &EntryId,
    ) -> APIResponse<mark_notification_read::APIResponse> {
        self.base
            .put(
                format!("notifications/{}/read", notification_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_all_read(&self) -> APIResponse<mark_all_notifications_read::APIResponse> {
        self.base
            .put("notifications/read".into(), StatusCode::OK)
            .await
    }

    pub async fn remove(
        &self,
        notification_id: &EntryId,
    ) -> APIResponse<remove_notification::APIResponse> {
        self.base
            .delete(format!("notifications/{}", notification_id), StatusCode::OK)
            .await
    }

    pub async fn clear(&self) -> APIResponse<clear_notifications::APIResponse> {
        self.base
            .delete("notifications".into(), StatusCode::OK)
            .await
    }
}
