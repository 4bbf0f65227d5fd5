/// `$250`
pub fn price_label(price: f64) -> String {
    format!("${price}")
}

/// `$250/night`
pub fn price_per_night_label(price: f64) -> String {
    format!("{}/night", price_label(price))
}

/// `4.8`
pub fn rating_label(rating: f64) -> String {
    rating.to_string()
}
