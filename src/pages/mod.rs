use hotelfinder_core::{
    entities::{id::HotelId, search::SearchCriteria},
    usecases::encode_search_query,
};

mod home;
mod not_found;
mod search;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Search,
    Hotel,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Search => "/search",
            Self::Hotel => "/hotel",
        }
    }
}

/// `/hotel/:id`
pub fn hotel_path(id: &HotelId) -> String {
    format!("{}/{id}", Page::Hotel.path())
}

/// `/search?destination=…&checkIn=…&checkOut=…&guests=…`
pub fn search_path(criteria: &SearchCriteria) -> String {
    format!("{}?{}", Page::Search.path(), encode_search_query(criteria))
}

pub use self::{home::*, not_found::*, search::*};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_detail_path() {
        assert_eq!(hotel_path(&HotelId::from(4)), "/hotel/4");
    }

    #[test]
    fn search_results_path() {
        let criteria = SearchCriteria {
            destination: "Swiss Alps".into(),
            check_in: "2024-01-10".into(),
            check_out: "2024-01-17".into(),
            guests: "3".into(),
        };
        assert_eq!(
            search_path(&criteria),
            "/search?destination=Swiss%20Alps&checkIn=2024-01-10&checkOut=2024-01-17&guests=3"
        );
    }
}
