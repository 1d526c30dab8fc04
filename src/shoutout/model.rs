use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoutout {
    pub id: String,
    pub name: String,
    pub shoutout: String,
    pub timestamp: DateTime<Utc>,
}

impl Shoutout {
    pub fn new(name: String, shoutout: String) -> Self {
        let now = Utc::now();
        Self {
            // Millisecond-epoch string, matching the persisted wire format
            id: now.timestamp_millis().to_string(),
            name,
            shoutout,
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_derived_from_creation_time() {
        let shoutout = Shoutout::new("Ana".to_string(), "Great demo".to_string());
        assert_eq!(shoutout.id, shoutout.timestamp.timestamp_millis().to_string());
    }

    #[test]
    fn serializes_with_expected_field_names() {
        let shoutout = Shoutout::new("Ana".to_string(), "Great demo".to_string());
        let value = serde_json::to_value(&shoutout).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj["id"].is_string());
        assert_eq!(obj["name"], "Ana");
        assert_eq!(obj["shoutout"], "Great demo");
        assert!(obj["timestamp"].is_string());
    }

    #[test]
    fn round_trips_through_json() {
        let shoutout = Shoutout::new("Ana".to_string(), "Great demo".to_string());
        let json = serde_json::to_string(&shoutout).unwrap();
        let parsed: Shoutout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, shoutout);
    }
}
