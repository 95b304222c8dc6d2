//! Form fixtures for persistence layer testing.

use std::collections::HashMap;
use std::sync::Arc;

use hms_persistence::backends::memory::MemoryBackend;
use hms_persistence::repository::EntityRepository;

/// A submitted form, as the HTTP layer hands it to the repository.
pub type Form = HashMap<String, String>;

/// Builds a form from field/value pairs.
pub fn form(pairs: &[(&str, &str)]) -> Form {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A complete hospital form.
pub fn hospital(name: &str) -> Form {
    form(&[
        ("name", name),
        ("address", "1 Main St"),
        ("phone", "555-0100"),
        ("beds_number", "120"),
    ])
}

/// A doctor form, optionally attached to a hospital.
pub fn doctor(surname: &str, hospital_id: Option<&str>) -> Form {
    let mut doctor = form(&[("surname", surname), ("profession", "Surgeon")]);
    if let Some(id) = hospital_id {
        doctor.insert("hospital_ID".to_string(), id.to_string());
    }
    doctor
}

/// A complete patient form.
pub fn patient(surname: &str, sex: &str) -> Form {
    form(&[
        ("surname", surname),
        ("born_date", "1990-04-12"),
        ("sex", sex),
        ("mpn", "MPN-1"),
    ])
}

/// A diagnosis form for a patient.
pub fn diagnosis(patient_id: &str, kind: &str) -> Form {
    form(&[
        ("patient_ID", patient_id),
        ("type", kind),
        ("information", "follow up in two weeks"),
    ])
}

/// A repository over a fresh, seeded in-memory store.
pub async fn seeded_memory_repo() -> EntityRepository<MemoryBackend> {
    let repo = EntityRepository::new(Arc::new(MemoryBackend::new()));
    repo.seed().await.expect("seeding an in-memory store");
    repo
}
