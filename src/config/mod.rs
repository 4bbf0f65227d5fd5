use anyhow::{ensure, Result};

use hotelfinder_core::{entities::geo::MapPoint, usecases::MapViewSettings};

mod raw;

const CONFIG_FILE: &str = include_str!("hotelfinder.toml");

/// The API URL can be overridden when the app is built.
const API_URL_OVERRIDE: Option<&str> = option_env!("HOTELFINDER_API_URL");

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const DEFAULT_MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const DEFAULT_MARKER_ICON_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png";
const DEFAULT_MARKER_ICON_SIZE: (f64, f64) = (25.0, 41.0);
const DEFAULT_MARKER_ICON_ANCHOR: (f64, f64) = (12.0, 41.0);

const MAX_ZOOM: f64 = 19.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: Api,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    pub url: String,
}

/// Everything the map component needs to know
/// besides the hotels it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub tile_layer_url: String,
    pub attribution: String,
    pub view: MapViewSettings,
    pub marker_icon: MarkerIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub url: String,
    /// Width and height in pixels.
    pub size: (f64, f64),
    /// Pixel of the image that points to the position.
    pub anchor: (f64, f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                url: DEFAULT_API_URL.to_string(),
            },
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_layer_url: DEFAULT_TILE_LAYER_URL.to_string(),
            attribution: DEFAULT_MAP_ATTRIBUTION.to_string(),
            view: MapViewSettings::default(),
            marker_icon: MarkerIcon {
                url: DEFAULT_MARKER_ICON_URL.to_string(),
                size: DEFAULT_MARKER_ICON_SIZE,
                anchor: DEFAULT_MARKER_ICON_ANCHOR,
            },
        }
    }
}

impl Config {
    /// Load the configuration that was bundled with the app.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::from_toml(CONFIG_FILE)?;
        if let Some(url) = API_URL_OVERRIDE {
            log::debug!("Use API URL {url} from build environment");
            cfg.api.url = url.to_string();
        }
        Ok(cfg)
    }

    /// Parse a TOML configuration, missing values are taken from the defaults.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml)?;
        Self::try_from(raw_config)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, map } = from;
        let Self {
            api: default_api,
            map: default_map,
        } = Self::default();

        let api = Api {
            url: api.and_then(|a| a.url).unwrap_or(default_api.url),
        };
        let map = match map {
            Some(map) => MapConfig::try_from_raw(map, default_map)?,
            None => default_map,
        };

        Ok(Self { api, map })
    }
}

impl MapConfig {
    fn try_from_raw(from: raw::Map, defaults: Self) -> Result<Self> {
        let raw::Map {
            tile_layer_url,
            attribution,
            hit_zoom,
            empty_zoom,
            empty_center,
            marker_icon,
        } = from;

        let tile_layer_url = tile_layer_url.unwrap_or(defaults.tile_layer_url);
        ensure!(
            ["{x}", "{y}", "{z}"]
                .iter()
                .all(|p| tile_layer_url.contains(p)),
            "Tile layer URL must contain the {{x}}, {{y}} and {{z}} placeholders"
        );

        let view = MapViewSettings {
            hit_zoom: hit_zoom.unwrap_or(defaults.view.hit_zoom),
            empty_zoom: empty_zoom.unwrap_or(defaults.view.empty_zoom),
            empty_center: empty_center
                .map(MapPoint::from)
                .unwrap_or(defaults.view.empty_center),
        };
        for zoom in [view.hit_zoom, view.empty_zoom] {
            ensure!(
                (0.0..=MAX_ZOOM).contains(&zoom),
                "Zoom level {zoom} is out of range"
            );
        }
        ensure!(view.empty_center.is_valid(), "Invalid map center");

        let marker_icon = match marker_icon {
            Some(raw::MarkerIcon {
                icon_url,
                size,
                anchor,
            }) => MarkerIcon {
                url: icon_url.unwrap_or(defaults.marker_icon.url),
                size: size.map_or(defaults.marker_icon.size, |[w, h]| (w, h)),
                anchor: anchor.map_or(defaults.marker_icon.anchor, |[x, y]| (x, y)),
            },
            None => defaults.marker_icon,
        };

        Ok(Self {
            tile_layer_url,
            attribution: attribution.unwrap_or(defaults.attribution),
            view,
            marker_icon,
        })
    }
}
