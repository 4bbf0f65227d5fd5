use serde::Deserialize;

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub map: Option<Map>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub tile_layer_url: Option<String>,
    pub attribution: Option<String>,
    pub hit_zoom: Option<f64>,
    pub empty_zoom: Option<f64>,
    pub empty_center: Option<[f64; 2]>,
    pub marker_icon: Option<MarkerIcon>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarkerIcon {
    pub icon_url: Option<String>,
    pub size: Option<[f64; 2]>,
    pub anchor: Option<[f64; 2]>,
}
