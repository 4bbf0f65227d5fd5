/// Guest count used when none is given.
pub const DEFAULT_GUESTS: &str = "1";

/// Search criteria entered on the landing page.
///
/// The values are kept as the raw text the user typed
/// (or the URL contained) so they can be passed on unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub destination : String,
    /// ISO date (`YYYY-MM-DD`)
    pub check_in    : String,
    /// ISO date (`YYYY-MM-DD`)
    pub check_out   : String,
    pub guests      : String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            destination: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
        }
    }
}

impl SearchCriteria {
    /// The number of guests if it is a valid integer.
    pub fn guest_count(&self) -> Option<u32> {
        self.guests.trim().parse().ok()
    }

    pub fn has_dates(&self) -> bool {
        !self.check_in.is_empty() && !self.check_out.is_empty()
    }
}
