mod catalogue_state;
mod featured_hotels;
mod filter_hotels;
mod format_labels;
mod list_keys;
mod search_query;
mod select_map_view;
mod summarize_stay;

pub use self::{
    catalogue_state::*, featured_hotels::*, filter_hotels::*, format_labels::*, list_keys::*,
    search_query::*, select_map_view::*, summarize_stay::*,
};

mod prelude {
    pub use crate::entities::{geo::*, hotel::*, search::*};
}

#[cfg(test)]
pub mod tests;
