use crate::entities::id::HotelId;

use super::prelude::*;

/// Key of a hotel within a rendered list.
///
/// Ids are not guaranteed to be unique (records may lack one),
/// so the position is part of the key.
pub type HotelListKey = (usize, HotelId);

/// Pair every hotel with its list key, keeping the order.
pub fn keyed_hotels(hotels: Vec<Hotel>) -> Vec<(HotelListKey, Hotel)> {
    hotels
        .into_iter()
        .enumerate()
        .map(|(index, hotel)| ((index, hotel.id.clone()), hotel))
        .collect()
}
