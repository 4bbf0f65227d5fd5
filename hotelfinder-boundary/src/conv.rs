use super::*;
use e::{geo::MapPoint, hotel as h, id::HotelId};
use hotelfinder_entities as e;

impl From<RecordId> for HotelId {
    fn from(from: RecordId) -> Self {
        match from {
            RecordId::Number(nr) => nr.into(),
            RecordId::Text(txt) => txt.into(),
        }
    }
}

impl From<Hotel> for h::Hotel {
    fn from(from: Hotel) -> Self {
        let Hotel {
            object_id,
            id,
            basic_info,
            location,
            rooms,
        } = from;
        let BasicInfo {
            name,
            stars,
            images,
        } = basic_info;
        let Location {
            city,
            country,
            coordinates,
        } = location;

        // An empty `_id` is treated as absent.
        let id = object_id
            .map(HotelId::from)
            .filter(HotelId::is_valid)
            .or_else(|| id.map(HotelId::from))
            .unwrap_or_default();
        let price = rooms
            .into_iter()
            .next()
            .and_then(|room| room.price_per_night)
            .unwrap_or_default();
        let image = images
            .into_iter()
            .next()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| h::PLACEHOLDER_IMAGE_URL.to_string());

        Self {
            id,
            name,
            location: h::location_label(&city, &country),
            price,
            rating: stars,
            image,
            coordinates: MapPoint::from(coordinates),
        }
    }
}

/// Convert all records into display-shape hotels, keeping their order.
pub fn into_hotels(records: Vec<Hotel>) -> Vec<h::Hotel> {
    records.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> h::Hotel {
        serde_json::from_str::<Hotel>(json).unwrap().into()
    }

    #[test]
    fn convert_complete_record() {
        let hotel = from_json(
            r#"{
              "_id": "65f0c1a2",
              "basicInfo": {
                "name": "Dominion Hotel",
                "stars": 4.8,
                "images": ["https://images.example/a.jpg", "https://images.example/b.jpg"]
              },
              "location": { "city": "New York", "country": "USA", "coordinates": [40.7128, -74.006] },
              "rooms": [ { "pricePerNight": 250 }, { "pricePerNight": 400 } ]
            }"#,
        );
        assert_eq!(hotel.id.as_str(), "65f0c1a2");
        assert_eq!(hotel.name, "Dominion Hotel");
        assert_eq!(hotel.location, "New York, USA");
        assert_eq!(hotel.price, 250.0);
        assert_eq!(hotel.rating, 4.8);
        assert_eq!(hotel.image, "https://images.example/a.jpg");
        assert_eq!(
            hotel.coordinates,
            MapPoint::from_lat_lng_deg(40.7128, -74.006)
        );
    }

    #[test]
    fn fallbacks_for_missing_images_and_rooms() {
        let hotel = from_json(
            r#"{
              "id": 3,
              "basicInfo": { "name": "Mountain View Lodge", "stars": 4.9 },
              "location": { "city": "Swiss Alps", "country": "Switzerland", "coordinates": [46.8182, 8.2275] }
            }"#,
        );
        assert_eq!(hotel.id.as_str(), "3");
        assert_eq!(hotel.price, 0.0);
        assert_eq!(hotel.image, h::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn first_room_without_price() {
        let hotel = from_json(
            r#"{
              "id": "x",
              "basicInfo": { "name": "Seaside Retreat", "stars": 4.8, "images": [""] },
              "location": { "city": "Santorini", "country": "Greece", "coordinates": [36.3932, 25.4615] },
              "rooms": [ {}, { "pricePerNight": 275 } ]
            }"#,
        );
        assert_eq!(hotel.price, 0.0);
        assert_eq!(hotel.image, h::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn object_id_takes_precedence() {
        let hotel = from_json(
            r#"{
              "_id": "abc", "id": 1,
              "basicInfo": { "name": "n", "stars": 1 },
              "location": { "city": "c", "country": "d", "coordinates": [0, 0] }
            }"#,
        );
        assert_eq!(hotel.id.as_str(), "abc");

        let hotel = from_json(
            r#"{
              "_id": "", "id": 1,
              "basicInfo": { "name": "n", "stars": 1 },
              "location": { "city": "c", "country": "d", "coordinates": [0, 0] }
            }"#,
        );
        assert_eq!(hotel.id.as_str(), "1");
    }

    #[test]
    fn record_without_any_id() {
        let hotel = from_json(
            r#"{
              "basicInfo": { "name": "Nameless Inn", "stars": 3 },
              "location": { "city": "c", "country": "d", "coordinates": [0, 0] }
            }"#,
        );
        assert!(!hotel.id.is_valid());
        assert_eq!(hotel.name, "Nameless Inn");
    }

    #[test]
    fn keep_order_of_records() {
        let records: Vec<Hotel> = serde_json::from_str(
            r#"[
              { "id": 2, "basicInfo": { "name": "B", "stars": 1 }, "location": { "city": "c", "country": "d", "coordinates": [0, 0] } },
              { "id": 1, "basicInfo": { "name": "A", "stars": 1 }, "location": { "city": "c", "country": "d", "coordinates": [0, 0] } }
            ]"#,
        )
        .unwrap();
        let names: Vec<_> = into_hotels(records).into_iter().map(|h| h.name).collect();
        assert_eq!(names, ["B", "A"]);
    }
}
