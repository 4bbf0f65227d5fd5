pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{criteria_builder::*, hotel_builder::*};

pub mod hotel_builder {

    use super::*;
    use crate::{geo::*, hotel::*, id::*};

    #[derive(Debug)]
    pub struct HotelBuild {
        hotel: Hotel,
    }

    impl HotelBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.hotel.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.hotel.name = name.into();
            self
        }
        pub fn location(mut self, city: &str, country: &str) -> Self {
            self.hotel.location = location_label(city, country);
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.hotel.price = price;
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.hotel.rating = rating;
            self
        }
        pub fn image(mut self, url: &str) -> Self {
            self.hotel.image = url.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.hotel.coordinates = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> Hotel {
            self.hotel
        }
    }

    impl Builder for Hotel {
        type Build = HotelBuild;
        fn build() -> HotelBuild {
            HotelBuild {
                hotel: Hotel {
                    id: HotelId::default(),
                    name: "".into(),
                    location: "".into(),
                    price: 0.0,
                    rating: 0.0,
                    image: PLACEHOLDER_IMAGE_URL.into(),
                    coordinates: MapPoint::default(),
                },
            }
        }
    }
}

pub mod criteria_builder {

    use super::*;
    use crate::search::*;

    #[derive(Debug)]
    pub struct SearchCriteriaBuild {
        criteria: SearchCriteria,
    }

    impl SearchCriteriaBuild {
        pub fn destination(mut self, x: &str) -> Self {
            self.criteria.destination = x.into();
            self
        }
        pub fn check_in(mut self, x: &str) -> Self {
            self.criteria.check_in = x.into();
            self
        }
        pub fn check_out(mut self, x: &str) -> Self {
            self.criteria.check_out = x.into();
            self
        }
        pub fn guests(mut self, x: &str) -> Self {
            self.criteria.guests = x.into();
            self
        }
        pub fn finish(self) -> SearchCriteria {
            self.criteria
        }
    }

    impl Builder for SearchCriteria {
        type Build = SearchCriteriaBuild;
        fn build() -> Self::Build {
            SearchCriteriaBuild {
                criteria: SearchCriteria::default(),
            }
        }
    }

    #[test]
    fn build_criteria() {
        let c = SearchCriteria::build()
            .destination("Bali")
            .check_in("2024-06-01")
            .check_out("2024-06-05")
            .guests("2")
            .finish();
        assert_eq!(c.guest_count(), Some(2));
        assert!(c.has_dates());
    }
}
