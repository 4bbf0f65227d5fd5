use crate::{geo::MapPoint, id::HotelId};

/// Image shown for hotels that do not provide any picture.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200";

/// A hotel as it is presented to the user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id          : HotelId,
    pub name        : String,
    /// Human readable "city, country" label.
    pub location    : String,
    /// Nightly rate of the first room.
    pub price       : f64,
    pub rating      : f64,
    pub image       : String,
    pub coordinates : MapPoint,
}

/// Build the "city, country" label of a hotel.
pub fn location_label(city: &str, country: &str) -> String {
    format!("{city}, {country}")
}
