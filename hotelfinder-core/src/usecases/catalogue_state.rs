use super::{featured_hotels, prelude::*};

/// What the pages know about the fetched hotel collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueState {
    Loading,
    Failed,
    Loaded(Vec<Hotel>),
}

impl CatalogueState {
    /// Derive the state from the result of the (pending) fetch.
    ///
    /// The error itself is logged where the fetch happens.
    pub fn from_fetched<E>(fetched: &Option<Result<Vec<Hotel>, E>>) -> Self {
        match fetched {
            None => Self::Loading,
            Some(Err(_)) => Self::Failed,
            Some(Ok(hotels)) => Self::Loaded(hotels.clone()),
        }
    }

    /// All fetched hotels, empty unless loaded.
    pub fn hotels(&self) -> &[Hotel] {
        match self {
            Self::Loaded(hotels) => hotels,
            Self::Loading | Self::Failed => &[],
        }
    }

    /// The featured hotels, empty unless loaded.
    pub fn featured(&self) -> &[Hotel] {
        featured_hotels(self.hotels())
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::hotels, *};

    type Fetched = Option<Result<Vec<Hotel>, String>>;

    #[test]
    fn pending_fetch() {
        let state = CatalogueState::from_fetched(&Fetched::None);
        assert_eq!(state, CatalogueState::Loading);
        assert!(state.featured().is_empty());
    }

    #[test]
    fn failed_fetch_has_nothing_to_feature() {
        let state = CatalogueState::from_fetched(&Some(Err("Failed to fetch".to_string())));
        assert_eq!(state, CatalogueState::Failed);
        assert!(state.hotels().is_empty());
        assert!(state.featured().is_empty());
    }

    #[test]
    fn loaded_catalogue() {
        let all = hotels(&["a", "b", "c", "d"]);
        let state = CatalogueState::from_fetched(&Fetched::Some(Ok(all.clone())));
        assert_eq!(state.hotels(), &all[..]);
        assert_eq!(state.featured(), &all[..3]);
    }

    #[test]
    fn empty_catalogue_is_loaded() {
        let state = CatalogueState::from_fetched(&Fetched::Some(Ok(vec![])));
        assert_eq!(state, CatalogueState::Loaded(vec![]));
        assert!(state.featured().is_empty());
    }
}
