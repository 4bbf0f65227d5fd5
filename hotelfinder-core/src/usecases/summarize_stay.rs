use time::{format_description::FormatItem, macros::format_description, Date};

use super::prelude::*;

const ISO_DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE_FORMAT: &[FormatItem] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

const NO_DATES_HINT: &str = "Select dates to see prices";
const NO_DESTINATION: &str = "your destination";

/// Heading of the search results: `Hotels in Bali`.
pub fn results_title(destination: &str) -> String {
    let destination = if destination.is_empty() {
        NO_DESTINATION
    } else {
        destination
    };
    format!("Hotels in {destination}")
}

/// Render an ISO date as `M/D/YYYY`.
///
/// Text that is not an ISO date is returned unchanged.
pub fn display_date(iso_date: &str) -> String {
    Date::parse(iso_date, ISO_DATE_FORMAT)
        .ok()
        .and_then(|date| date.format(DISPLAY_DATE_FORMAT).ok())
        .unwrap_or_else(|| iso_date.to_string())
}

/// `1 guest`, `2 guests`
///
/// The plural is used if the guest count is an integer greater than one,
/// anything else is shown as it is in singular.
pub fn guests_label(criteria: &SearchCriteria) -> String {
    let plural = criteria.guest_count().is_some_and(|n| n > 1);
    let suffix = if plural { "s" } else { "" };
    format!("{} guest{suffix}", criteria.guests)
}

/// One line summary of the requested stay.
pub fn summarize_stay(criteria: &SearchCriteria) -> String {
    if !criteria.has_dates() {
        return NO_DATES_HINT.to_string();
    }
    format!(
        "{} - {} • {}",
        display_date(&criteria.check_in),
        display_date(&criteria.check_out),
        guests_label(criteria)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelfinder_entities::builders::*;

    #[test]
    fn title_with_and_without_destination() {
        assert_eq!(results_title("Bali"), "Hotels in Bali");
        assert_eq!(results_title(""), "Hotels in your destination");
    }

    #[test]
    fn display_iso_dates() {
        assert_eq!(display_date("2024-06-01"), "6/1/2024");
        assert_eq!(display_date("2024-12-24"), "12/24/2024");
    }

    #[test]
    fn keep_invalid_dates() {
        assert_eq!(display_date("tomorrow"), "tomorrow");
        assert_eq!(display_date("2024-02-30"), "2024-02-30");
    }

    fn guests(guests: &str) -> String {
        guests_label(&SearchCriteria::build().guests(guests).finish())
    }

    #[test]
    fn pluralize_guests() {
        assert_eq!(guests("1"), "1 guest");
        assert_eq!(guests("2"), "2 guests");
        assert_eq!(guests("10"), "10 guests");
        assert_eq!(guests("0"), "0 guest");
    }

    #[test]
    fn words_are_singular() {
        assert_eq!(guests("many"), "many guest");
        assert_eq!(guests("inf"), "inf guest");
        assert_eq!(guests("infinity"), "infinity guest");
        assert_eq!(guests("NaN"), "NaN guest");
        assert_eq!(guests("1e1"), "1e1 guest");
    }

    #[test]
    fn summary_needs_both_dates() {
        let criteria = SearchCriteria::build().check_in("2024-06-01").finish();
        assert_eq!(summarize_stay(&criteria), "Select dates to see prices");
    }

    #[test]
    fn full_summary() {
        let criteria = SearchCriteria::build()
            .destination("Bali")
            .check_in("2024-06-01")
            .check_out("2024-06-05")
            .guests("2")
            .finish();
        assert_eq!(summarize_stay(&criteria), "6/1/2024 - 6/5/2024 • 2 guests");
    }
}
