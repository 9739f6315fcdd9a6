use std::str::FromStr;
use tracing::{info, warn};
use url::Url;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REMINDER_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
const DEFAULT_TOAST_TIMEOUT_SECS: u64 = 5;
/// Upper bound for the configurable durations, keeps timer deadlines representable
const MAX_DURATION_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    /// Base url of the backend owning the medication reminders
    pub reminder_api_url: Url,
    /// Bearer token used when querying the reminder backend
    pub reminder_api_token: Option<String>,
    /// How often the reminder backend is polled for due reminders.
    /// This also is the width of the qualification window, see
    /// `qualification_window_millis`.
    pub poll_interval_millis: u64,
    /// How long a toast stays visible before it is hidden automatically
    pub toast_timeout_millis: u64,
    /// Whether native OS notifications should be requested and shown
    pub native_notifications: bool,
    /// Whether an audible cue is played for new reminder notifications
    pub audio_cue: bool,
}

fn parse_env<T: FromStr + ToString>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name,
                    value,
                    default.to_string()
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn clamp_duration(name: &str, secs: u64) -> u64 {
    if secs > MAX_DURATION_SECS {
        warn!(
            "The given {}: {} is too large, using: {}.",
            name, secs, MAX_DURATION_SECS
        );
        return MAX_DURATION_SECS;
    }
    secs
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env("PORT", DEFAULT_PORT);

        let default_url = Url::parse(DEFAULT_REMINDER_API_URL).expect("Default url to be valid");
        let reminder_api_url = match std::env::var("REMINDER_API_URL") {
            Ok(url) => match Url::parse(&url) {
                Ok(url) => url,
                Err(e) => {
                    warn!(
                        "The given REMINDER_API_URL: {} is not valid ({}), falling back to: {}.",
                        url, e, default_url
                    );
                    default_url
                }
            },
            Err(_) => {
                info!(
                    "Did not find REMINDER_API_URL environment variable. Using: {}",
                    default_url
                );
                default_url
            }
        };
        let reminder_api_token = std::env::var("REMINDER_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let mut poll_interval_secs =
            parse_env("REMINDER_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS);
        if poll_interval_secs == 0 {
            warn!(
                "REMINDER_POLL_INTERVAL_SECS must be positive, falling back to the default: {}.",
                DEFAULT_POLL_INTERVAL_SECS
            );
            poll_interval_secs = DEFAULT_POLL_INTERVAL_SECS;
        }
        let toast_timeout_secs = parse_env("TOAST_TIMEOUT_SECS", DEFAULT_TOAST_TIMEOUT_SECS);
        let poll_interval_secs = clamp_duration("REMINDER_POLL_INTERVAL_SECS", poll_interval_secs);
        let toast_timeout_secs = clamp_duration("TOAST_TIMEOUT_SECS", toast_timeout_secs);

        Self {
            port,
            reminder_api_url,
            reminder_api_token,
            poll_interval_millis: poll_interval_secs.saturating_mul(1000),
            toast_timeout_millis: toast_timeout_secs.saturating_mul(1000),
            native_notifications: parse_env("NATIVE_NOTIFICATIONS", true),
            audio_cue: parse_env("REMINDER_AUDIO_CUE", true),
        }
    }

    /// A reminder is due when its notify time lies within this many millis
    /// ahead of now. Equal to the poll interval so that every reminder falls
    /// into the window of at least one tick.
    pub fn qualification_window_millis(&self) -> i64 {
        i64::try_from(self.poll_interval_millis).unwrap_or(i64::MAX)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "PORT",
        "REMINDER_API_URL",
        "REMINDER_API_TOKEN",
        "REMINDER_POLL_INTERVAL_SECS",
        "TOAST_TIMEOUT_SECS",
        "NATIVE_NOTIFICATIONS",
        "REMINDER_AUDIO_CUE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn it_uses_defaults() {
        clear_env();
        let config = Config::new();
        assert_eq!(config.port, 5000);
        assert_eq!(config.reminder_api_url.as_str(), "http://localhost:8000/api");
        assert_eq!(config.reminder_api_token, None);
        assert_eq!(config.poll_interval_millis, 60 * 1000);
        assert_eq!(config.toast_timeout_millis, 5 * 1000);
        assert_eq!(config.qualification_window_millis(), 60 * 1000);
        assert!(config.native_notifications);
        assert!(config.audio_cue);
    }

    #[test]
    #[serial]
    fn it_reads_env() {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("REMINDER_API_URL", "https://api.medtrack.example/v1");
        std::env::set_var("REMINDER_API_TOKEN", "secret");
        std::env::set_var("REMINDER_POLL_INTERVAL_SECS", "30");
        std::env::set_var("NATIVE_NOTIFICATIONS", "false");
        let config = Config::new();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.reminder_api_url.host_str(), Some("api.medtrack.example"));
        assert_eq!(config.reminder_api_token.as_deref(), Some("secret"));
        assert_eq!(config.qualification_window_millis(), 30 * 1000);
        assert!(!config.native_notifications);
    }

    #[test]
    #[serial]
    fn it_falls_back_on_invalid_values() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("REMINDER_API_URL", "::bad");
        std::env::set_var("REMINDER_POLL_INTERVAL_SECS", "0");
        let config = Config::new();
        clear_env();

        assert_eq!(config.port, 5000);
        assert_eq!(config.reminder_api_url.as_str(), "http://localhost:8000/api");
        assert_eq!(config.poll_interval_millis, 60 * 1000);
    }

    #[test]
    #[serial]
    fn it_caps_huge_durations() {
        clear_env();
        std::env::set_var("REMINDER_POLL_INTERVAL_SECS", u64::MAX.to_string());
        std::env::set_var("TOAST_TIMEOUT_SECS", (u64::MAX / 10).to_string());
        let config = Config::new();
        clear_env();

        let one_year_millis = 60 * 60 * 24 * 365 * 1000;
        assert_eq!(config.poll_interval_millis, one_year_millis);
        assert_eq!(config.toast_timeout_millis, one_year_millis);
        assert_eq!(
            config.qualification_window_millis(),
            one_year_millis as i64
        );
    }
}
