use super::prelude::*;
use crate::text::contains_ignoring_case;

/// Check if the destination term occurs in the name or the location of a hotel.
pub fn hotel_matches_destination(hotel: &Hotel, destination: &str) -> bool {
    contains_ignoring_case(&hotel.location, destination)
        || contains_ignoring_case(&hotel.name, destination)
}

/// Select all candidates that match the destination term.
///
/// The order of the candidates is preserved.
pub fn filter_hotels(candidates: &[Hotel], destination: &str) -> Vec<Hotel> {
    let hotels: Vec<_> = candidates
        .iter()
        .filter(|hotel| hotel_matches_destination(hotel, destination))
        .cloned()
        .collect();
    log::debug!(
        "{} of {} hotels match destination '{destination}'",
        hotels.len(),
        candidates.len()
    );
    hotels
}
