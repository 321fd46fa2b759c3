//! Record kinds and the tagged record union

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::{Amenity, BaseModel, City, Place, Review, State, User};

/// Every kind of record the application knows how to store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    BaseModel,
    Amenity,
    City,
    Place,
    Review,
    State,
    User,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::BaseModel,
        RecordKind::Amenity,
        RecordKind::City,
        RecordKind::Place,
        RecordKind::Review,
        RecordKind::State,
        RecordKind::User,
    ];

    /// Class name, as used in storage keys and the `__class__` tag.
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::BaseModel => "BaseModel",
            RecordKind::Amenity => "Amenity",
            RecordKind::City => "City",
            RecordKind::Place => "Place",
            RecordKind::Review => "Review",
            RecordKind::State => "State",
            RecordKind::User => "User",
        }
    }

    /// Database table backing this kind. `BaseModel` has none.
    pub fn table(self) -> Option<&'static str> {
        match self {
            RecordKind::BaseModel => None,
            RecordKind::Amenity => Some("amenities"),
            RecordKind::City => Some("cities"),
            RecordKind::Place => Some("places"),
            RecordKind::Review => Some("reviews"),
            RecordKind::State => Some("states"),
            RecordKind::User => Some("users"),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown record kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// `<ClassName>.<id>`
pub fn storage_key(kind: RecordKind, id: &str) -> String {
    format!("{}.{}", kind.name(), id)
}

/// A single stored record of any kind.
///
/// Serializes as the record's own fields plus a `__class__` tag naming its
/// kind, which is the shape each entry takes in the JSON storage file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Record {
    BaseModel(BaseModel),
    Amenity(Amenity),
    City(City),
    Place(Place),
    Review(Review),
    State(State),
    User(User),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::BaseModel(_) => RecordKind::BaseModel,
            Record::Amenity(_) => RecordKind::Amenity,
            Record::City(_) => RecordKind::City,
            Record::Place(_) => RecordKind::Place,
            Record::Review(_) => RecordKind::Review,
            Record::State(_) => RecordKind::State,
            Record::User(_) => RecordKind::User,
        }
    }

    pub fn base(&self) -> &BaseModel {
        match self {
            Record::BaseModel(r) => r,
            Record::Amenity(r) => &r.base,
            Record::City(r) => &r.base,
            Record::Place(r) => &r.base,
            Record::Review(r) => &r.base,
            Record::State(r) => &r.base,
            Record::User(r) => &r.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseModel {
        match self {
            Record::BaseModel(r) => r,
            Record::Amenity(r) => &mut r.base,
            Record::City(r) => &mut r.base,
            Record::Place(r) => &mut r.base,
            Record::Review(r) => &mut r.base,
            Record::State(r) => &mut r.base,
            Record::User(r) => &mut r.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn key(&self) -> String {
        storage_key(self.kind(), self.id())
    }

    /// Display name for kinds that have one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Record::Amenity(r) => Some(&r.name),
            Record::City(r) => Some(&r.name),
            Record::Place(r) => Some(&r.name),
            Record::State(r) => Some(&r.name),
            Record::BaseModel(_) | Record::Review(_) | Record::User(_) => None,
        }
    }

    pub fn touch(&mut self) {
        self.base_mut().touch();
    }
}

macro_rules! impl_from_record {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Record {
                fn from(r: $kind) -> Self {
                    Record::$kind(r)
                }
            }
        )*
    };
}

impl_from_record!(BaseModel, Amenity, City, Place, Review, State, User);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_name_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.name().parse::<RecordKind>(), Ok(kind));
        }
        assert_eq!(
            "Planet".parse::<RecordKind>(),
            Err(UnknownKind("Planet".to_string()))
        );
        // Names are case-sensitive class names
        assert!("state".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_key_format() {
        let state: Record = State::new("California").into();
        assert_eq!(state.key(), format!("State.{}", state.id()));
        assert_eq!(state.kind(), RecordKind::State);
        assert_eq!(state.name(), Some("California"));
    }

    #[test]
    fn test_serializes_with_class_tag() {
        let state: Record = State::new("Nevada").into();
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["__class__"], "State");
        assert_eq!(value["name"], "Nevada");
        assert_eq!(value["id"], state.id());
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_deserializes_from_file_entry() {
        let value = json!({
            "__class__": "City",
            "id": "1721b75c-e0b2-46ae-8dd2-f86b62fb46e6",
            "created_at": "2017-03-25T02:17:06.000000",
            "updated_at": "2017-03-25T02:17:06.000000",
            "state_id": "421a55f4-7d82-47d9-b54c-a76916479545",
            "name": "Akron"
        });

        let record: Record = serde_json::from_value(value).unwrap();
        match record {
            Record::City(city) => {
                assert_eq!(city.name, "Akron");
                assert_eq!(city.state_id, "421a55f4-7d82-47d9-b54c-a76916479545");
            }
            other => panic!("expected a city, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_place_defaults_and_optionals() {
        let value = json!({
            "__class__": "Place",
            "id": "p1",
            "created_at": "2017-03-25T02:17:06.000000",
            "updated_at": "2017-03-25T02:17:06.000000",
            "city_id": "c1",
            "user_id": "u1",
            "name": "Lovely loft",
            "latitude": 37.77,
            "number_rooms": 3
        });

        let record: Record = serde_json::from_value(value).unwrap();
        let Record::Place(place) = record else {
            panic!("expected a place");
        };
        assert_eq!(place.number_rooms, 3);
        assert_eq!(place.max_guest, 0);
        assert_eq!(place.latitude, Some(37.77));
        assert_eq!(place.longitude, None);
        assert!(place.amenity_ids.is_empty());
    }

    #[test]
    fn test_unknown_class_tag_is_rejected() {
        let value = json!({
            "__class__": "Spaceship",
            "id": "x",
            "created_at": "2017-03-25T02:17:06.000000",
            "updated_at": "2017-03-25T02:17:06.000000"
        });
        assert!(serde_json::from_value::<Record>(value).is_err());
    }

    #[test]
    fn test_touch_moves_updated_at_only() {
        let mut record: Record = Amenity::new("Wifi").into();
        let created = record.base().created_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        record.touch();
        assert_eq!(record.base().created_at, created);
        assert!(record.base().updated_at > created);
    }
}
