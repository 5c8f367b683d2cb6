//! Seed datasets.
//!
//! A dataset is a JSON object with four arrays. The older field and
//! collection names (`users`, `participants`, `user_id`) are accepted as
//! aliases, and integer ids are read as their decimal string form.

use gather_core::{Account, AttendanceLink, Event, Location};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// The four record collections as loaded from a seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, alias = "users")]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default, alias = "participants")]
    pub links: Vec<AttendanceLink>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json_str(source: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let dataset = Self::from_json_str(&source)?;
        info!(
            path = %path.display(),
            accounts = dataset.accounts.len(),
            events = dataset.events.len(),
            locations = dataset.locations.len(),
            links = dataset.links.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}
