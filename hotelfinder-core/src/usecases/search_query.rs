use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::prelude::*;

pub const DESTINATION_PARAM: &str = "destination";
pub const CHECK_IN_PARAM: &str = "checkIn";
pub const CHECK_OUT_PARAM: &str = "checkOut";
pub const GUESTS_PARAM: &str = "guests";

/// Characters that are escaped in a URI component
/// (everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode the criteria as URL query string (without a leading `?`).
pub fn encode_search_query(criteria: &SearchCriteria) -> String {
    let SearchCriteria {
        destination,
        check_in,
        check_out,
        guests,
    } = criteria;
    [
        (DESTINATION_PARAM, destination),
        (CHECK_IN_PARAM, check_in),
        (CHECK_OUT_PARAM, check_out),
        (GUESTS_PARAM, guests),
    ]
    .into_iter()
    .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, URI_COMPONENT)))
    .collect::<Vec<_>>()
    .join("&")
}

/// Read the criteria from a URL query string.
///
/// A leading `?` is ignored, `+` is read as space.
/// If a parameter occurs more than once the first one wins.
/// Missing parameters fall back to the defaults of [`SearchCriteria`],
/// the same applies to an empty guest count.
pub fn parse_search_query(query: &str) -> SearchCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut destination = None;
    let mut check_in = None;
    let mut check_out = None;
    let mut guests = None;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match decode_component(key).as_str() {
            DESTINATION_PARAM => &mut destination,
            CHECK_IN_PARAM => &mut check_in,
            CHECK_OUT_PARAM => &mut check_out,
            GUESTS_PARAM => &mut guests,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_component(value));
        }
    }

    let defaults = SearchCriteria::default();
    SearchCriteria {
        destination: destination.unwrap_or(defaults.destination),
        check_in: check_in.unwrap_or(defaults.check_in),
        check_out: check_out.unwrap_or(defaults.check_out),
        guests: guests
            .filter(|g| !g.is_empty())
            .unwrap_or(defaults.guests),
    }
}

fn decode_component(component: &str) -> String {
    let component = component.replace('+', " ");
    percent_decode_str(&component)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelfinder_entities::builders::*;

    #[test]
    fn encode_all_params() {
        let criteria = SearchCriteria::build()
            .destination("New York")
            .check_in("2024-06-01")
            .check_out("2024-06-05")
            .guests("2")
            .finish();
        assert_eq!(
            encode_search_query(&criteria),
            "destination=New%20York&checkIn=2024-06-01&checkOut=2024-06-05&guests=2"
        );
    }

    #[test]
    fn encode_reserved_characters() {
        let criteria = SearchCriteria::build()
            .destination("a&b=c?d/é+(x)")
            .finish();
        assert_eq!(
            encode_search_query(&criteria),
            "destination=a%26b%3Dc%3Fd%2F%C3%A9%2B(x)&checkIn=&checkOut=&guests=1"
        );
    }

    #[test]
    fn parse_all_params() {
        let criteria =
            parse_search_query("?destination=Bali&checkIn=2024-06-01&checkOut=2024-06-05&guests=2");
        assert_eq!(
            criteria,
            SearchCriteria::build()
                .destination("Bali")
                .check_in("2024-06-01")
                .check_out("2024-06-05")
                .guests("2")
                .finish()
        );
    }

    #[test]
    fn parse_missing_params() {
        assert_eq!(parse_search_query(""), SearchCriteria::default());
        assert_eq!(parse_search_query("?"), SearchCriteria::default());
        let criteria = parse_search_query("foo=bar&checkIn");
        assert_eq!(criteria.check_in, "");
        assert_eq!(criteria.guests, "1");
    }

    #[test]
    fn parse_empty_guests_as_default() {
        assert_eq!(parse_search_query("guests=").guests, "1");
    }

    #[test]
    fn keep_invalid_guests() {
        assert_eq!(parse_search_query("guests=abc").guests, "abc");
    }

    #[test]
    fn first_occurrence_wins() {
        let criteria = parse_search_query("destination=Kyoto&destination=Tokyo");
        assert_eq!(criteria.destination, "Kyoto");
    }

    #[test]
    fn decode_plus_and_escapes() {
        let criteria = parse_search_query("destination=Swiss+Alps%2C%20Switzerland");
        assert_eq!(criteria.destination, "Swiss Alps, Switzerland");
        let criteria = parse_search_query("destination=%E4%BA%AC%E9%83%BD");
        assert_eq!(criteria.destination, "京都");
        let criteria = parse_search_query("destination=%FF");
        assert_eq!(criteria.destination, "\u{FFFD}");
    }

    #[test]
    fn roundtrip() {
        let criteria = SearchCriteria::build()
            .destination("Sankt Moritz + Davos & Co. = 100% Alps?")
            .check_in("2024-12-24")
            .check_out("2025-01-02")
            .guests("4")
            .finish();
        assert_eq!(parse_search_query(&encode_search_query(&criteria)), criteria);
    }
}
