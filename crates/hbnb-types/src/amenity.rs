//! Amenity records

use serde::{Deserialize, Serialize};

use crate::BaseModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseModel,
    pub name: String,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            name: name.into(),
        }
    }
}
