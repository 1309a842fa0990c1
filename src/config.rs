use serde::{Deserialize, Serialize};

/// Ten seconds of frames at a 60 Hz tick.
pub const DEFAULT_CAPACITY: usize = 600;

/// Settings for a history ring, deserializable from e.g. a JSON file.
///
/// Missing fields take their defaults. The capacity is validated when the
/// ring is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capacity_takes_default() {
        let config: HistoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_from_json() {
        let config: HistoryConfig = serde_json::from_str(r#"{"capacity": 32}"#).unwrap();
        assert_eq!(config, HistoryConfig::default().with_capacity(32));
    }
}
