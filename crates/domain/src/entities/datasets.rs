//! Datasets - the (possibly partial) set of loaded tables

use super::Table;
use crate::value_objects::DatasetKind;
use std::collections::BTreeMap;

/// Mapping from dataset to its table; absent files simply have no entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    tables: BTreeMap<DatasetKind, Table>,
}

impl Datasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: DatasetKind, table: Table) -> Option<Table> {
        self.tables.insert(kind, table)
    }

    pub fn get(&self, kind: DatasetKind) -> Option<&Table> {
        self.tables.get(&kind)
    }

    pub fn get_mut(&mut self, kind: DatasetKind) -> Option<&mut Table> {
        self.tables.get_mut(&kind)
    }

    pub fn contains(&self, kind: DatasetKind) -> bool {
        self.tables.contains_key(&kind)
    }

    /// Number of datasets present
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
