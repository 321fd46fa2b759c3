//! State records

use serde::{Deserialize, Serialize};

use crate::BaseModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub base: BaseModel,
    pub name: String,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            name: name.into(),
        }
    }
}
