use super::act_on_toast::ActOnToastUseCase;
use crate::shared::usecase::Subscriber;
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::NotifierContext;

pub struct NavigateToActionTargetSubscriber;

#[async_trait::async_trait]
impl Subscriber<ActOnToastUseCase> for NavigateToActionTargetSubscriber {
    async fn notify(&self, entry: &NotificationEntry, ctx: &NotifierContext) {
        if let Some(target) = &entry.action_target {
            ctx.navigator.navigate(target);
        }
    }
}
