//! Review records

use serde::{Deserialize, Serialize};

use crate::BaseModel;

/// A review left by `user_id` on `place_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseModel,
    pub place_id: String,
    pub user_id: String,
    pub text: String,
}

impl Review {
    pub fn new(
        place_id: impl Into<String>,
        user_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseModel::new(),
            place_id: place_id.into(),
            user_id: user_id.into(),
            text: text.into(),
        }
    }
}
