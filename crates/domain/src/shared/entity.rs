use medtrack_notifier_utils::create_random_suffix;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const ID_SUFFIX_LEN: usize = 9;

pub trait Entity {
    fn id(&self) -> &EntryId;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifier of a `NotificationEntry`.
///
/// Generated as the creation timestamp followed by a random suffix so that
/// entries created within the same millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate(now_ts: i64) -> Self {
        Self(format!("{}-{}", now_ts, create_random_suffix(ID_SUFFIX_LEN)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique_within_same_millis() {
        let ids = (0..1000)
            .map(|_| EntryId::generate(1613862000000))
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn generated_id_starts_with_timestamp() {
        let id = EntryId::generate(42);
        assert!(id.as_str().starts_with("42-"));
        assert_eq!(id.as_str().len(), "42-".len() + ID_SUFFIX_LEN);
    }
}
