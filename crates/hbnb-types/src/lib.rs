//! HBNB Types - Record definitions shared by every storage backend
//!
//! This crate contains only pure data types with no async runtime or
//! database dependencies. Each record kind carries the common identity and
//! timestamp fields from [`BaseModel`] plus its own attributes.

pub mod amenity;
pub mod base;
pub mod city;
pub mod place;
pub mod record;
pub mod review;
pub mod state;
pub mod timestamp;
pub mod user;

pub use amenity::*;
pub use base::*;
pub use city::*;
pub use place::*;
pub use record::*;
pub use review::*;
pub use state::*;
pub use user::*;
