//! Stored rows and the write payloads that create or change them.
//!
//! Serialized field names are the wire names. Payload types refuse unknown
//! fields so a record that slipped past validation cannot be half-applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scientist {
    pub scientist_id: i64,
    pub name: String,
    pub madness_level: i64,
    pub galaxy_destruction_attempts: i64,
    pub time_added: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewScientist {
    pub name: String,
    pub madness_level: i64,
    pub galaxy_destruction_attempts: i64,
}

/// Partial scientist update; `None` leaves the column as is
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScientistPatch {
    pub name: Option<String>,
    pub madness_level: Option<i64>,
    pub galaxy_destruction_attempts: Option<i64>,
}

impl Scientist {
    /// Merges the supplied columns; `time_added` is never touched
    pub fn apply(&mut self, patch: ScientistPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(level) = patch.madness_level {
            self.madness_level = level;
        }
        if let Some(attempts) = patch.galaxy_destruction_attempts {
            self.galaxy_destruction_attempts = attempts;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub device_id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub power: i64,
    pub time_added: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDevice {
    pub name: String,
    pub scientist_id: i64,
    pub power: i64,
}

/// Partial device update; `None` leaves the column as is
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevicePatch {
    pub name: Option<String>,
    pub scientist_id: Option<i64>,
    pub power: Option<i64>,
}

impl Device {
    /// Merges the supplied columns; `time_added` is never touched
    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(scientist_id) = patch.scientist_id {
            self.scientist_id = scientist_id;
        }
        if let Some(power) = patch.power {
            self.power = power;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feynman() -> Scientist {
        Scientist {
            scientist_id: 1,
            name: "Richard Feynman".into(),
            madness_level: 5,
            galaxy_destruction_attempts: 0,
            time_added: Utc::now(),
        }
    }

    #[test]
    fn test_patch_merges_only_supplied_columns() {
        let mut scientist = feynman();
        let stamped = scientist.time_added;

        scientist.apply(ScientistPatch {
            galaxy_destruction_attempts: Some(500),
            ..Default::default()
        });

        assert_eq!(scientist.name, "Richard Feynman");
        assert_eq!(scientist.madness_level, 5);
        assert_eq!(scientist.galaxy_destruction_attempts, 500);
        assert_eq!(scientist.time_added, stamped);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut scientist = feynman();
        let before = scientist.clone();
        scientist.apply(ScientistPatch::default());
        assert_eq!(scientist, before);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(feynman()).unwrap();
        assert_eq!(json["scientist_id"], 1);
        assert_eq!(json["galaxy_destruction_attempts"], 0);
        assert!(json["time_added"].is_string());
    }

    #[test]
    fn test_payloads_reject_unknown_fields() {
        let result: Result<DevicePatch, _> =
            serde_json::from_value(json!({"power": 3, "device_id": 1}));
        assert!(result.is_err());

        let patch: DevicePatch = serde_json::from_value(json!({"power": 3})).unwrap();
        assert_eq!(patch.power, Some(3));
        assert_eq!(patch.name, None);
    }
}
