//! Cart snapshots
//!
//! A cart saved as a mapping from product id to quantity. Prices and titles
//! are not stored; they are looked up again in the catalog on restore.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::ProductId;

/// Errors reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// YAML could not be parsed or produced.
    #[error("invalid cart snapshot: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Product id to quantity mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    lines: BTreeMap<ProductId, u32>,
}

impl CartSnapshot {
    /// Parse a snapshot from YAML. An empty document is an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Yaml`] if the document is not a mapping of ids to quantities.
    pub fn from_yaml(yaml: &str) -> Result<Self, SnapshotError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_norway::from_str(yaml)?)
    }

    /// Serialise the snapshot as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Yaml`] if serialisation fails.
    pub fn to_yaml(&self) -> Result<String, SnapshotError> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Quantity recorded for `id`.
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.lines.get(&id).copied()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.lines.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<(ProductId, u32)> for CartSnapshot {
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        let mut lines = BTreeMap::new();

        for (id, quantity) in iter {
            let entry = lines.entry(id).or_insert(0_u32);
            *entry = entry.saturating_add(quantity);
        }

        Self { lines }
    }
}
