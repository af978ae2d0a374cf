//! Tower construction settings.

use crate::data::glass::DEFAULT_CAPACITY;

/// Shape and glass size of a tower built by
/// [`Tower::from_config`](crate::tower::Tower::from_config).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    /// Number of rows; the tower holds `rows * (rows + 1) / 2` glasses.
    pub rows: usize,
    /// Capacity applied to every glass.
    pub capacity: f64,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = TowerConfig::default();
        assert_eq!(cfg.rows, 4);
        assert_eq!(cfg.capacity, 250.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: TowerConfig = serde_json::from_str(r#"{"rows": 6}"#).unwrap();
        assert_eq!(
            cfg,
            TowerConfig {
                rows: 6,
                ..TowerConfig::default()
            }
        );
    }
}
