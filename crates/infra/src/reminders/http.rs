use super::IReminderSource;
use anyhow::Context;
use chrono::{DateTime, Utc};
use medtrack_notifier_domain::{DueReminder, ReminderStatus};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReminderDTO {
    id: String,
    medication_id: String,
    medication_name: String,
    dosage: String,
    scheduled_time: DateTime<Utc>,
    notify_before_minutes: i64,
    status: ReminderStatus,
}

impl From<ReminderDTO> for DueReminder {
    fn from(dto: ReminderDTO) -> Self {
        Self {
            id: dto.id,
            medication_id: dto.medication_id,
            medication_name: dto.medication_name,
            dosage: dto.dosage,
            scheduled_ts: dto.scheduled_time.timestamp_millis(),
            notify_before_minutes: dto.notify_before_minutes,
            status: dto.status,
        }
    }
}

pub struct HttpReminderSource {
    client: Client,
    address: String,
    api_token: Option<String>,
}

impl HttpReminderSource {
    pub fn new(base_url: &Url, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            address: format!(
                "{}/reminders/today",
                base_url.as_str().trim_end_matches('/')
            ),
            api_token,
        }
    }
}

#[async_trait::async_trait]
impl IReminderSource for HttpReminderSource {
    async fn get_todays_reminders(&self) -> anyhow::Result<Vec<DueReminder>> {
        let mut req = self.client.get(&self.address);
        if let Some(token) = &self.api_token {
            req = req.bearer_auth(token);
        }

        let reminders = req
            .send()
            .await
            .with_context(|| format!("Unable to reach reminder backend at {}", self.address))?
            .error_for_status()?
            .json::<Vec<ReminderDTO>>()
            .await
            .context("Malformed reminders response")?;

        Ok(reminders.into_iter().map(DueReminder::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_address_from_base_url() {
        let url = Url::parse("http://localhost:8000/api/").unwrap();
        let source = HttpReminderSource::new(&url, None);
        assert_eq!(source.address, "http://localhost:8000/api/reminders/today");

        let url = Url::parse("http://localhost:8000/api").unwrap();
        let source = HttpReminderSource::new(&url, None);
        assert_eq!(source.address, "http://localhost:8000/api/reminders/today");
    }

    #[test]
    fn it_deserializes_backend_reminders() {
        let body = r#"[{
            "id": "r1",
            "medicationId": "m1",
            "medicationName": "Metformin",
            "dosage": "500mg",
            "scheduledTime": "2021-02-21T08:00:00Z",
            "notifyBeforeMinutes": 15,
            "status": "pending"
        }, {
            "id": "r2",
            "medicationId": "m2",
            "medicationName": "Lisinopril",
            "dosage": "10mg",
            "scheduledTime": "2021-02-21T09:00:00+01:00",
            "notifyBeforeMinutes": 0,
            "status": "snoozed"
        }]"#;
        let reminders = serde_json::from_str::<Vec<ReminderDTO>>(body)
            .unwrap()
            .into_iter()
            .map(DueReminder::from)
            .collect::<Vec<_>>();

        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].scheduled_ts, 1613894400000);
        assert_eq!(reminders[0].status, ReminderStatus::Pending);
        assert_eq!(reminders[1].scheduled_ts, 1613894400000);
        assert_eq!(reminders[1].status, ReminderStatus::Unknown);
    }
}
