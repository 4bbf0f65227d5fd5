use strum::{Display, EnumIter, IntoEnumIterator};

/// Facilities every hotel of the portfolio offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Amenity {
    #[strum(to_string = "Free WiFi")]
    FreeWifi,
    #[strum(to_string = "Swimming Pool")]
    SwimmingPool,
    #[strum(to_string = "Free Parking")]
    FreeParking,
    #[strum(to_string = "Restaurant")]
    Restaurant,
}

impl Amenity {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::FreeWifi => "📶",
            Self::SwimmingPool => "🏊",
            Self::FreeParking => "🅿️",
            Self::Restaurant => "🍽️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenities_in_display_order() {
        let names: Vec<_> = Amenity::all().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            ["Free WiFi", "Swimming Pool", "Free Parking", "Restaurant"]
        );
    }
}
