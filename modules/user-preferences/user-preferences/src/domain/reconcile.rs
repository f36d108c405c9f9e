//! Diff between stored preference records and a desired mapping.
//!
//! Planning is pure; the service applies the resulting writes in order.

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::WriteOp;
use super::record::{PreferenceRecord, ResourceKind};

#[derive(Debug, Clone, PartialEq)]
pub enum PlannedWrite {
    /// Existing record with only its value replaced.
    Update(PreferenceRecord),
    /// Existing record whose key is no longer desired.
    Delete(String),
    /// Desired key with no existing record.
    Create(PreferenceRecord),
}

impl PlannedWrite {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Update(record) | Self::Create(record) => &record.name,
            Self::Delete(name) => name,
        }
    }

    #[must_use]
    pub fn op(&self) -> WriteOp {
        match self {
            Self::Update(_) => WriteOp::Update,
            Self::Delete(_) => WriteOp::Delete,
            Self::Create(_) => WriteOp::Create,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilePlan {
    writes: Vec<PlannedWrite>,
    unchanged: usize,
}

impl ReconcilePlan {
    /// Writes in application order: updates and deletes of existing records
    /// first, creates last.
    #[must_use]
    pub fn writes(&self) -> &[PlannedWrite] {
        &self.writes
    }

    #[must_use]
    pub fn into_writes(self) -> Vec<PlannedWrite> {
        self.writes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> ReconcileSummary {
        let mut summary = ReconcileSummary {
            unchanged: self.unchanged,
            ..ReconcileSummary::default()
        };
        for write in &self.writes {
            match write {
                PlannedWrite::Update(_) => summary.updated += 1,
                PlannedWrite::Delete(_) => summary.deleted += 1,
                PlannedWrite::Create(_) => summary.created += 1,
            }
        }
        summary
    }
}

/// Computes the writes that turn `existing` into exactly `desired`.
///
/// Stored values are compared to desired values as strings after coercion,
/// so a stored `1` equals a desired `"1"`. Equal keys produce no write.
#[must_use]
pub fn plan(
    kind: &ResourceKind,
    existing: Vec<PreferenceRecord>,
    mut desired: BTreeMap<String, String>,
) -> ReconcilePlan {
    let mut writes = Vec::with_capacity(existing.len() + desired.len());
    let mut unchanged = 0;

    for mut record in existing {
        match desired.remove(&record.name) {
            Some(value) if record.value_string() != value => {
                record.value = Some(Value::String(value));
                writes.push(PlannedWrite::Update(record));
            }
            Some(_) => unchanged += 1,
            None => writes.push(PlannedWrite::Delete(record.name)),
        }
    }

    writes.extend(
        desired
            .into_iter()
            .map(|(name, value)| PlannedWrite::Create(PreferenceRecord::new(kind, name, value))),
    );

    ReconcilePlan { writes, unchanged }
}
