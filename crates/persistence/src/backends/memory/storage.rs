//! KeyValueStore implementation for the in-memory backend.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::core::{BackendKind, KeyValueStore};
use crate::error::StorageResult;
use crate::types::Fields;

use super::MemoryBackend;
use super::backend::{Entry, not_an_integer, wrong_type};

#[async_trait]
impl KeyValueStore for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn ping(&self) -> StorageResult<()> {
        self.ensure_available()
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.ensure_available()?;
        match self.entries.read().get(key) {
            None => Ok(None),
            Some(Entry::Scalar(value)) => Ok(Some(value.clone())),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_available()?;
        self.entries
            .write()
            .insert(key.to_string(), Entry::Scalar(value.to_string()));
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> StorageResult<bool> {
        self.ensure_available()?;
        let mut entries = self.entries.write();
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), Entry::Scalar(value.to_string()));
        Ok(true)
    }

    async fn incr(&self, key: &str) -> StorageResult<i64> {
        self.ensure_available()?;
        let mut entries = self.entries.write();
        let current = match entries.get(key) {
            None => 0,
            Some(Entry::Scalar(value)) => value.parse::<i64>().map_err(|_| not_an_integer(key))?,
            Some(_) => return Err(wrong_type(key)),
        };
        let next = current.checked_add(1).ok_or_else(|| not_an_integer(key))?;
        entries.insert(key.to_string(), Entry::Scalar(next.to_string()));
        Ok(next)
    }

    async fn hgetall(&self, key: &str) -> StorageResult<Fields> {
        self.ensure_available()?;
        match self.entries.read().get(key) {
            None => Ok(Fields::new()),
            Some(Entry::Hash(fields)) => Ok(fields.clone()),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> StorageResult<bool> {
        self.ensure_available()?;
        let mut entries = self.entries.write();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(Fields::new()));
        match entry {
            Entry::Hash(fields) => Ok(fields
                .insert(field.to_string(), value.to_string())
                .is_none()),
            _ => Err(wrong_type(key)),
        }
    }

    async fn sadd(&self, key: &str, member: &str) -> StorageResult<bool> {
        self.ensure_available()?;
        let mut entries = self.entries.write();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Set(BTreeSet::new()));
        match entry {
            Entry::Set(members) => Ok(members.insert(member.to_string())),
            _ => Err(wrong_type(key)),
        }
    }

    async fn smembers(&self, key: &str) -> StorageResult<Vec<String>> {
        self.ensure_available()?;
        match self.entries.read().get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Set(members)) => Ok(members.iter().cloned().collect()),
            Some(_) => Err(wrong_type(key)),
        }
    }

    async fn scard(&self, key: &str) -> StorageResult<u64> {
        self.ensure_available()?;
        match self.entries.read().get(key) {
            None => Ok(0),
            Some(Entry::Set(members)) => Ok(members.len() as u64),
            Some(_) => Err(wrong_type(key)),
        }
    }
}
