use super::prelude::*;

/// Zoom levels and fallback position used to frame search results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewSettings {
    /// Zoom level when at least one hotel is shown.
    pub hit_zoom: f64,
    /// Zoom level when nothing was found.
    pub empty_zoom: f64,
    /// Center when nothing was found.
    pub empty_center: MapPoint,
}

impl Default for MapViewSettings {
    fn default() -> Self {
        Self {
            hit_zoom: 10.0,
            empty_zoom: 2.0,
            empty_center: MapPoint::from_lat_lng_deg(0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: f64,
}

/// Center the map on the first hotel or show the whole world
/// if there is none.
pub fn select_map_view(hotels: &[Hotel], settings: &MapViewSettings) -> MapView {
    match hotels.first() {
        Some(hotel) => MapView {
            center: hotel.coordinates,
            zoom: settings.hit_zoom,
        },
        None => MapView {
            center: settings.empty_center,
            zoom: settings.empty_zoom,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelfinder_entities::builders::*;

    #[test]
    fn center_on_first_hotel() {
        let hotels = vec![
            Hotel::build().pos(-8.4095, 115.1889).finish(),
            Hotel::build().pos(-8.5005, 115.1325).finish(),
        ];
        let view = select_map_view(&hotels, &MapViewSettings::default());
        assert_eq!(view.center, MapPoint::from_lat_lng_deg(-8.4095, 115.1889));
        assert_eq!(view.zoom, 10.0);
    }

    #[test]
    fn world_view_without_hotels() {
        let view = select_map_view(&[], &MapViewSettings::default());
        assert_eq!(view.center, MapPoint::from_lat_lng_deg(0.0, 0.0));
        assert_eq!(view.zoom, 2.0);
    }

    #[test]
    fn custom_settings() {
        let settings = MapViewSettings {
            hit_zoom: 12.0,
            empty_zoom: 3.0,
            empty_center: MapPoint::from_lat_lng_deg(48.0, 11.0),
        };
        let view = select_map_view(&[], &settings);
        assert_eq!(view.center, settings.empty_center);
        assert_eq!(view.zoom, 3.0);
    }
}
