//! Identity and timestamps common to every record

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Base record: a globally unique id plus creation/update times.
///
/// Every other kind embeds one of these (flattened on the wire), and it is
/// also a storable kind in its own right for the file backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    pub id: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl BaseModel {
    pub fn new() -> Self {
        let now = timestamp::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = timestamp::now();
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}
