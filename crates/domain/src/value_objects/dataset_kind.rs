//! DatasetKind - the five named tabular inputs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named CSV inputs the program reads from its data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum DatasetKind {
    Teacher,
    Training,
    Incentives,
    Community,
    Student,
}

impl DatasetKind {
    /// All datasets in load order
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::Teacher,
        DatasetKind::Training,
        DatasetKind::Incentives,
        DatasetKind::Community,
        DatasetKind::Student,
    ];

    /// Dataset key (file stem)
    pub fn key(&self) -> &'static str {
        match self {
            DatasetKind::Teacher => "teacher_data",
            DatasetKind::Training => "training_data",
            DatasetKind::Incentives => "incentives_data",
            DatasetKind::Community => "community_data",
            DatasetKind::Student => "student_data",
        }
    }

    /// File name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Teacher => "teacher_data.csv",
            DatasetKind::Training => "training_data.csv",
            DatasetKind::Incentives => "incentives_data.csv",
            DatasetKind::Community => "community_data.csv",
            DatasetKind::Student => "student_data.csv",
        }
    }

    /// Word used in prompt headings ("Here's the teacher data ...")
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Teacher => "teacher",
            DatasetKind::Training => "training",
            DatasetKind::Incentives => "incentives",
            DatasetKind::Community => "community",
            DatasetKind::Student => "student",
        }
    }

    /// Look up a dataset by key; `None` for anything outside the fixed set
    pub fn from_key(key: &str) -> Option<Self> {
        DatasetKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
