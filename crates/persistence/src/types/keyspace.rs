//! Keyspace layout.
//!
//! Every record lives in a hash at `<type>:<id>`, next to a scalar counter at
//! `<type>:autoID` holding the next id to hand out. Doctor-patient links are
//! sets at `doctor-patient:<doctor_id>`, and `db_initiated` flags a seeded
//! keyspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key of the flag written once the counters have been seeded.
pub const DB_INITIATED_KEY: &str = "db_initiated";

/// Prefix of the doctor-patient link sets.
pub const LINK_PREFIX: &str = "doctor-patient";

/// Value every counter is seeded with. Id 0 is never handed out by a
/// seeded keyspace.
pub const FIRST_ID: i64 = 1;

/// The kinds of records held in the keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A hospital.
    Hospital,
    /// A doctor, optionally attached to a hospital.
    Doctor,
    /// A patient.
    Patient,
    /// A diagnosis for exactly one patient.
    Diagnosis,
}

impl EntityKind {
    /// All kinds, in seeding order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Hospital,
        EntityKind::Doctor,
        EntityKind::Patient,
        EntityKind::Diagnosis,
    ];

    /// Returns the keyspace prefix for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Hospital => "hospital",
            EntityKind::Doctor => "doctor",
            EntityKind::Patient => "patient",
            EntityKind::Diagnosis => "diagnosis",
        }
    }

    /// Returns the key of this kind's id counter.
    pub fn counter_key(&self) -> String {
        format!("{}:autoID", self.as_str())
    }

    /// Returns the hash key of the record with the given id.
    ///
    /// The id is taken as a string since references arrive as raw form
    /// values and are looked up without parsing.
    pub fn record_key(&self, id: impl fmt::Display) -> String {
        format!("{}:{}", self.as_str(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(EntityKind::Hospital),
            "doctor" => Ok(EntityKind::Doctor),
            "patient" => Ok(EntityKind::Patient),
            "diagnosis" => Ok(EntityKind::Diagnosis),
            other => Err(format!("unknown entity type: {}", other)),
        }
    }
}

/// Returns the key of the set holding the patients linked to a doctor.
pub fn link_key(doctor_id: impl fmt::Display) -> String {
    format!("{}:{}", LINK_PREFIX, doctor_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(EntityKind::Hospital.counter_key(), "hospital:autoID");
        assert_eq!(EntityKind::Diagnosis.record_key(7), "diagnosis:7");
        assert_eq!(EntityKind::Doctor.record_key("abc"), "doctor:abc");
        assert_eq!(link_key(3), "doctor-patient:3");
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>(), Ok(kind));
        }
        assert!("doctor-patient".parse::<EntityKind>().is_err());
        assert!("Hospital".parse::<EntityKind>().is_err());
    }
}
