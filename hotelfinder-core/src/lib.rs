//! # hotelfinder-core
//!
//! Use cases of the HotelFinder web app.
//!
//! Everything in here is pure and synchronous:
//! no network, no DOM, no global state.

pub mod text;
pub mod usecases;

pub use hotelfinder_entities as entities;
