#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # hotelfinder-entities
//!
//! Reusable, agnostic domain entities for HotelFinder.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod amenity;
pub mod geo;
pub mod hotel;
pub mod id;
pub mod search;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
