use crate::{APIResponse, BaseClient};
use medtrack_notifier_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ToastClient {
    base: Arc<BaseClient>,
}

impl ToastClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_toast::APIResponse> {
        self.base.get("toast".into(), StatusCode::OK).await
    }

    pub async fn dismiss(&self) -> APIResponse<dismiss_toast::APIResponse> {
        self.base.delete("toast".into(), StatusCode::OK).await
    }

    pub async fn act(&self) -> APIResponse<act_on_toast::APIResponse> {
        self.base
            .post::<_, ()>(None, "toast/action".into(), StatusCode::OK)
            .await
    }
}
