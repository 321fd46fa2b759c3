//! City records

use serde::{Deserialize, Serialize};

use crate::BaseModel;

/// A city, owned by the state whose id is `state_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: BaseModel,
    pub state_id: String,
    pub name: String,
}

impl City {
    pub fn new(state_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            state_id: state_id.into(),
            name: name.into(),
        }
    }
}
