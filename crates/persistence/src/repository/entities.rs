//! Schema-driven record repository.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::core::KeyValueStore;
use crate::error::{BackendError, StorageError, StorageResult, ValidationError, WriteError};
use crate::types::{
    CreatedLink, CreatedRecord, DB_INITIATED_KEY, EntityKind, FIRST_ID, Fields, StoredRecord,
    link_key,
};

use super::schema::{ReferencePolicy, field_value};

/// Record access for every entity kind, driven by [`EntitySchema`].
///
/// The repository holds the injected store handle; cloning it is cheap and
/// shares the store.
///
/// [`EntitySchema`]: super::EntitySchema
pub struct EntityRepository<S> {
    store: Arc<S>,
}

impl<S> Clone for EntityRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> EntityRepository<S> {
    /// Creates a repository over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seeds every id counter with [`FIRST_ID`] unless the keyspace is
    /// already flagged as initialised.
    ///
    /// Counters that already exist are left alone. Returns `true` when this
    /// call did the seeding.
    pub async fn seed(&self) -> StorageResult<bool> {
        if self.store.get(DB_INITIATED_KEY).await?.is_some() {
            debug!("Keyspace already initialised");
            return Ok(false);
        }

        let first = FIRST_ID.to_string();
        for kind in EntityKind::ALL {
            self.store
                .set_if_absent(&kind.counter_key(), &first)
                .await?;
        }
        self.store.set(DB_INITIATED_KEY, "1").await?;

        info!(backend = self.store.backend_name(), "Seeded id counters");
        Ok(true)
    }

    /// Reads the id counter of a kind: the next id to hand out.
    pub async fn counter(&self, kind: EntityKind) -> StorageResult<Option<u64>> {
        let key = kind.counter_key();
        match self.store.get(&key).await? {
            None => Ok(None),
            Some(raw) => raw.parse::<u64>().map(Some).map_err(|e| {
                StorageError::Backend(BackendError::CorruptValue {
                    key,
                    message: format!("counter {:?} is not a non-negative integer: {}", raw, e),
                })
            }),
        }
    }

    /// Number of ids handed out so far, not counting the reserved id 0.
    pub async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        Ok(self
            .counter(kind)
            .await?
            .map(|next| next.saturating_sub(1))
            .unwrap_or(0))
    }

    /// Lists every stored record of a kind in ascending id order.
    ///
    /// Ids whose hash is empty are skipped.
    pub async fn list(&self, kind: EntityKind) -> StorageResult<Vec<StoredRecord>> {
        let Some(next) = self.counter(kind).await? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for id in 0..next {
            let fields = self.store.hgetall(&kind.record_key(id)).await?;
            if !fields.is_empty() {
                records.push(StoredRecord::new(id, fields));
            }
        }
        Ok(records)
    }

    /// Reads one record by its raw id. Returns `None` when nothing is stored
    /// there.
    pub async fn fetch(&self, kind: EntityKind, id: &str) -> StorageResult<Option<Fields>> {
        let fields = self.store.hgetall(&kind.record_key(id)).await?;
        Ok(if fields.is_empty() { None } else { Some(fields) })
    }

    /// Validates a submitted form and stores it as a new record.
    ///
    /// Nothing is written when validation fails. Once the id is allocated,
    /// every schema field is written (absent optional fields as empty
    /// strings); if fewer fields than expected are newly stored the call
    /// fails with [`WriteError::Partial`] and the fields written so far
    /// stay in place.
    pub async fn create(
        &self,
        kind: EntityKind,
        form: &HashMap<String, String>,
    ) -> StorageResult<CreatedRecord> {
        let schema = kind.schema();
        schema.validate_form(form)?;

        let referenced = match &schema.reference {
            Some(check) => {
                let value = field_value(form, check.field);
                if value.is_empty() && check.policy == ReferencePolicy::WhenPresent {
                    None
                } else {
                    match self.fetch(check.target, value).await? {
                        Some(fields) => Some(fields),
                        None => {
                            return Err(ValidationError::DanglingReference {
                                field: check.field.to_string(),
                                target: check.target,
                                value: value.to_string(),
                                message: check.message.to_string(),
                            }
                            .into());
                        }
                    }
                }
            }
            None => None,
        };

        let id = self.allocate_id(kind).await?;
        let key = kind.record_key(id);

        let mut written = 0;
        for field in schema.fields {
            if self
                .store
                .hset(&key, field, field_value(form, field))
                .await?
            {
                written += 1;
            }
        }

        if written != schema.fields.len() {
            error!(
                key = %key,
                expected = schema.fields.len(),
                written,
                "Record only partially written"
            );
            return Err(WriteError::Partial {
                key,
                expected: schema.fields.len(),
                written,
            }
            .into());
        }

        let display = schema.display.render(form, referenced.as_ref());
        debug!(kind = %kind, id, "Record created");

        Ok(CreatedRecord { kind, id, display })
    }

    /// Links a patient to a doctor. Both must exist.
    pub async fn link(&self, doctor_id: &str, patient_id: &str) -> StorageResult<CreatedLink> {
        if doctor_id.is_empty() || patient_id.is_empty() {
            return Err(ValidationError::MissingRequiredFields {
                entity: EntityKind::Doctor,
                message: "ID required".to_string(),
            }
            .into());
        }

        let patient = self.fetch(EntityKind::Patient, patient_id).await?;
        let doctor = self.fetch(EntityKind::Doctor, doctor_id).await?;
        if patient.is_none() || doctor.is_none() {
            let (target, value) = if doctor.is_none() {
                (EntityKind::Doctor, doctor_id)
            } else {
                (EntityKind::Patient, patient_id)
            };
            return Err(ValidationError::DanglingReference {
                field: format!("{}_ID", target),
                target,
                value: value.to_string(),
                message: "No such ID for doctor or patient".to_string(),
            }
            .into());
        }

        let newly_linked = self.store.sadd(&link_key(doctor_id), patient_id).await?;
        debug!(doctor_id, patient_id, newly_linked, "Doctor-patient link stored");

        Ok(CreatedLink {
            doctor_id: doctor_id.to_string(),
            patient_id: patient_id.to_string(),
            newly_linked,
        })
    }

    /// Lists every doctor's linked patients, keyed by doctor id.
    ///
    /// Doctors without links are left out. Patient ids are ordered
    /// shortest-first, then lexically, which is numeric order for plain
    /// decimal ids.
    pub async fn links(&self) -> StorageResult<BTreeMap<u64, Vec<String>>> {
        let Some(next) = self.counter(EntityKind::Doctor).await? else {
            return Ok(BTreeMap::new());
        };

        let mut links = BTreeMap::new();
        for doctor_id in 0..next {
            let mut patients = self.store.smembers(&link_key(doctor_id)).await?;
            if patients.is_empty() {
                continue;
            }
            patients.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
            links.insert(doctor_id, patients);
        }
        Ok(links)
    }

    /// Number of patients linked to one doctor.
    pub async fn link_count(&self, doctor_id: u64) -> StorageResult<u64> {
        self.store.scard(&link_key(doctor_id)).await
    }

    /// Hands out the next id of a kind in one atomic step.
    ///
    /// The id is the counter value just before the increment.
    async fn allocate_id(&self, kind: EntityKind) -> StorageResult<u64> {
        let key = kind.counter_key();
        let next = self.store.incr(&key).await?;
        u64::try_from(next - 1).map_err(|_| {
            StorageError::Backend(BackendError::CorruptValue {
                key,
                message: format!("counter incremented to {}", next),
            })
        })
    }
}
