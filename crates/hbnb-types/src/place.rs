//! Place (rental listing) records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::BaseModel;

/// A rental listing in `city_id`, hosted by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseModel,
    pub city_id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Linked amenity ids. The database backend keeps these in the
    /// `place_amenity` link table.
    #[serde(default)]
    pub amenity_ids: BTreeSet<String>,
}

impl Place {
    pub fn new(
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseModel::new(),
            city_id: city_id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenity_ids: BTreeSet::new(),
        }
    }

    /// Link an amenity. Returns false if it was already linked.
    pub fn add_amenity(&mut self, amenity_id: impl Into<String>) -> bool {
        self.amenity_ids.insert(amenity_id.into())
    }
}
