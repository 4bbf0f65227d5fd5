mod amenities;
mod hotel_card;
mod map;
mod navbar;
mod search_form;
mod status;

pub use self::{amenities::*, hotel_card::*, map::*, navbar::*, search_form::*, status::*};
