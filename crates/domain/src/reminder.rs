use crate::notification::{NewNotification, NotificationKind};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard route listing the reminders of the day
pub const REMINDERS_VIEW: &str = "/reminders";

const MILLIS_PER_MINUTE: i64 = 1000 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Acknowledged,
    Missed,
    Skipped,
    /// Any status the backend reports that this client does not know about
    #[serde(other)]
    Unknown,
}

/// A medication dose reminder owned by the backend.
/// It is only ever read by this service, never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct DueReminder {
    pub id: String,
    pub medication_id: String,
    pub medication_name: String,
    pub dosage: String,
    /// Millis timestamp of the dose
    pub scheduled_ts: i64,
    /// How long before `scheduled_ts` the patient wants to be notified
    pub notify_before_minutes: i64,
    pub status: ReminderStatus,
}

impl DueReminder {
    /// The millis timestamp at which the patient should be notified.
    ///
    /// `None` for a negative advance window or when the timestamp does not fit
    /// in an `i64`, both only possible with malformed backend data.
    pub fn notify_at(&self) -> Option<i64> {
        if self.notify_before_minutes < 0 {
            return None;
        }
        self.notify_before_minutes
            .checked_mul(MILLIS_PER_MINUTE)
            .and_then(|advance| self.scheduled_ts.checked_sub(advance))
    }

    /// A reminder qualifies when it is still pending and its notify time lies
    /// in `[now, now + window]`. Whether it was already notified is tracked by
    /// the caller.
    pub fn is_due(&self, now: i64, window: i64) -> bool {
        if self.status != ReminderStatus::Pending {
            return false;
        }
        match self.notify_at().and_then(|at| at.checked_sub(now)) {
            Some(delta) => (0..=window).contains(&delta),
            None => false,
        }
    }

    pub fn to_notification(&self) -> NewNotification {
        let at = match Utc.timestamp_millis_opt(self.scheduled_ts).single() {
            Some(dt) => dt.format("%H:%M UTC").to_string(),
            None => "the scheduled time".to_string(),
        };
        let when = if self.notify_before_minutes > 0 {
            format!("{} minutes from now", self.notify_before_minutes)
        } else {
            "now".to_string()
        };

        NewNotification::new(
            NotificationKind::Reminder,
            format!("Medication reminder: {}", self.medication_name),
            format!(
                "Take {} of {} at {} ({})",
                self.dosage, self.medication_name, at, when
            ),
        )
        .with_action(REMINDERS_VIEW, Some("View reminders".into()))
        .with_source(Some(self.medication_id.clone()), Some(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sun Feb 21 2021 08:00:00 UTC
    const SCHEDULED: i64 = 1613894400000;
    const WINDOW: i64 = 60 * 1000;

    fn reminder(status: ReminderStatus) -> DueReminder {
        DueReminder {
            id: "rem-1".into(),
            medication_id: "med-1".into(),
            medication_name: "Metformin".into(),
            dosage: "500mg".into(),
            scheduled_ts: SCHEDULED,
            notify_before_minutes: 15,
            status,
        }
    }

    #[test]
    fn notify_at_subtracts_advance_window() {
        let r = reminder(ReminderStatus::Pending);
        assert_eq!(r.notify_at(), Some(SCHEDULED - 15 * 60 * 1000));
    }

    #[test]
    fn it_qualifies_only_inside_window() {
        let r = reminder(ReminderStatus::Pending);
        let notify_at = r.notify_at().unwrap();

        assert!(!r.is_due(notify_at - WINDOW - 1000, WINDOW));
        assert!(r.is_due(notify_at - WINDOW, WINDOW));
        assert!(r.is_due(notify_at - 1000, WINDOW));
        assert!(r.is_due(notify_at, WINDOW));
        assert!(!r.is_due(notify_at + 1, WINDOW));
        assert!(!r.is_due(notify_at + 61 * 1000, WINDOW));
    }

    #[test]
    fn it_only_qualifies_pending_reminders() {
        for status in [
            ReminderStatus::Sent,
            ReminderStatus::Acknowledged,
            ReminderStatus::Missed,
            ReminderStatus::Skipped,
            ReminderStatus::Unknown,
        ] {
            let r = reminder(status);
            assert!(!r.is_due(r.notify_at().unwrap(), WINDOW));
        }
    }

    #[test]
    fn out_of_range_values_never_qualify() {
        let mut r = reminder(ReminderStatus::Pending);

        r.notify_before_minutes = i64::MAX / 1000;
        assert_eq!(r.notify_at(), None);
        assert!(!r.is_due(SCHEDULED, WINDOW));

        r.notify_before_minutes = -5;
        assert_eq!(r.notify_at(), None);
        assert!(!r.is_due(SCHEDULED + 5 * 60 * 1000, WINDOW));

        r.notify_before_minutes = 15;
        r.scheduled_ts = i64::MIN + 1000;
        assert_eq!(r.notify_at(), None);
        assert!(!r.is_due(0, WINDOW));

        // Far future schedule: notify time exists but the delta to a very
        // negative now does not fit
        r.scheduled_ts = i64::MAX;
        assert!(r.notify_at().is_some());
        assert!(!r.is_due(i64::MIN, WINDOW));
        assert!(!r.is_due(SCHEDULED, WINDOW));
    }

    #[test]
    fn huge_advance_window_still_composes_text() {
        let mut r = reminder(ReminderStatus::Pending);
        r.notify_before_minutes = i64::MAX;
        r.scheduled_ts = i64::MAX;
        let n = r.to_notification();
        assert_eq!(n.title, "Medication reminder: Metformin");
        assert!(n.body.starts_with("Take 500mg of Metformin at the scheduled time"));
    }

    #[test]
    fn it_composes_reminder_notification() {
        let n = reminder(ReminderStatus::Pending).to_notification();
        assert_eq!(n.kind, NotificationKind::Reminder);
        assert_eq!(n.title, "Medication reminder: Metformin");
        assert_eq!(
            n.body,
            "Take 500mg of Metformin at 08:00 UTC (15 minutes from now)"
        );
        assert_eq!(n.action_target.as_deref(), Some(REMINDERS_VIEW));
        assert_eq!(n.medication_id.as_deref(), Some("med-1"));
        assert_eq!(n.reminder_id.as_deref(), Some("rem-1"));

        let mut r = reminder(ReminderStatus::Pending);
        r.notify_before_minutes = 0;
        assert!(r.to_notification().body.ends_with("(now)"));
    }

    #[test]
    fn unknown_status_deserializes() {
        let status: ReminderStatus = serde_json::from_str("\"snoozed\"").unwrap();
        assert_eq!(status, ReminderStatus::Unknown);
        let status: ReminderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ReminderStatus::Pending);
    }
}
