//! User account records

use serde::{Deserialize, Serialize};

use crate::BaseModel;

/// User account
///
/// `password` is whatever the caller assigned until the record is staged in
/// a store; stores replace a plaintext value with its encoded (argon2 PHC)
/// form, and an encoded value is persisted and read back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base: BaseModel::new(),
            email: email.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
        }
    }
}
