//! Aggregate statistics over the stored records.
//!
//! Everything is recomputed from the store on each call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::KeyValueStore;
use crate::error::StorageResult;
use crate::repository::EntityRepository;
use crate::types::EntityKind;

/// Name reported for a hospital record without a `name` field.
const UNKNOWN_NAME: &str = "Unknown";

/// Counts, averages and per-hospital staffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Hospitals created so far.
    pub hospital_count: u64,
    /// Doctors created so far.
    pub doctor_count: u64,
    /// Patients created so far.
    pub patient_count: u64,
    /// Diagnoses created so far.
    pub diagnosis_count: u64,
    /// Number of distinct doctor-patient links.
    pub doctor_patient_connections: u64,
    /// Sum of the four entity counts.
    pub total_entities: u64,
    /// Links per doctor, rounded to two decimals.
    pub avg_patients_per_doctor: f64,
    /// Diagnoses per patient, rounded to two decimals.
    pub avg_diagnoses_per_patient: f64,
    /// One entry per stored hospital, in id order.
    pub hospitals_with_stats: Vec<HospitalStats>,
}

/// Staffing of one hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalStats {
    /// Hospital id.
    pub id: u64,
    /// Hospital name.
    pub name: String,
    /// Doctors whose `hospital_ID` names this hospital.
    pub doctors_count: u64,
}

impl AnalyticsReport {
    /// Computes the report from the current store contents.
    pub async fn compute<S: KeyValueStore>(repo: &EntityRepository<S>) -> StorageResult<Self> {
        let hospital_count = repo.count(EntityKind::Hospital).await?;
        let doctor_count = repo.count(EntityKind::Doctor).await?;
        let patient_count = repo.count(EntityKind::Patient).await?;
        let diagnosis_count = repo.count(EntityKind::Diagnosis).await?;

        let mut doctor_patient_connections = 0;
        if let Some(next) = repo.counter(EntityKind::Doctor).await? {
            for doctor_id in 0..next {
                doctor_patient_connections += repo.link_count(doctor_id).await?;
            }
        }

        let hospitals = repo.list(EntityKind::Hospital).await?;
        let doctors = repo.list(EntityKind::Doctor).await?;

        let hospitals_with_stats = hospitals
            .iter()
            .map(|hospital| {
                let id = hospital.id.to_string();
                let doctors_count = doctors
                    .iter()
                    .filter(|doctor| doctor.get("hospital_ID") == Some(id.as_str()))
                    .count() as u64;
                HospitalStats {
                    id: hospital.id,
                    name: hospital.get("name").unwrap_or(UNKNOWN_NAME).to_string(),
                    doctors_count,
                }
            })
            .collect();

        let report = Self {
            hospital_count,
            doctor_count,
            patient_count,
            diagnosis_count,
            doctor_patient_connections,
            total_entities: hospital_count + doctor_count + patient_count + diagnosis_count,
            avg_patients_per_doctor: ratio(doctor_patient_connections, doctor_count),
            avg_diagnoses_per_patient: ratio(diagnosis_count, patient_count),
            hospitals_with_stats,
        };

        debug!(
            total_entities = report.total_entities,
            connections = report.doctor_patient_connections,
            "Analytics computed"
        );
        Ok(report)
    }
}

/// `numerator / denominator` rounded to two decimals, halves to even; 0 for
/// an empty denominator.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let value = numerator as f64 / denominator as f64;
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_rounds_to_two_decimals() {
        assert_eq!(ratio(2, 3), 0.67);
        assert_eq!(ratio(4, 2), 2.0);
    }

    #[test]
    fn test_ratio_rounds_halves_to_even() {
        assert_eq!(ratio(1, 8), 0.12);
        assert_eq!(ratio(3, 8), 0.38);
        assert_eq!(ratio(5, 8), 0.62);
        assert_eq!(ratio(9, 8), 1.12);
    }

    #[test]
    fn test_ratio_of_empty_denominator() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(0, 0), 0.0);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = AnalyticsReport {
            hospital_count: 1,
            doctor_count: 1,
            patient_count: 0,
            diagnosis_count: 0,
            doctor_patient_connections: 0,
            total_entities: 2,
            avg_patients_per_doctor: 0.0,
            avg_diagnoses_per_patient: 0.0,
            hospitals_with_stats: vec![HospitalStats {
                id: 1,
                name: "St. Mary".to_string(),
                doctors_count: 1,
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hospital_count"], 1);
        assert_eq!(json["hospitals_with_stats"][0]["name"], "St. Mary");
        assert_eq!(json["hospitals_with_stats"][0]["doctors_count"], 1);
    }
}
