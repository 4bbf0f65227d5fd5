use super::prelude::*;

/// Number of hotels highlighted on the landing page.
pub const FEATURED_HOTELS_COUNT: usize = 3;

/// The first hotels in the order they were fetched.
pub fn featured_hotels(hotels: &[Hotel]) -> &[Hotel] {
    &hotels[..FEATURED_HOTELS_COUNT.min(hotels.len())]
}
