use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, MouseEvents, Popup, Position, TileLayer, Tooltip};
use leptos_router::*;
use wasm_bindgen::JsCast;

use hotelfinder_core::{
    entities::hotel::Hotel,
    usecases::{
        keyed_hotels, price_label, price_per_night_label, rating_label, select_map_view, MapView,
    },
};

use crate::{
    config::{MapConfig, MarkerIcon},
    hotel_path,
};

#[component]
pub fn Map(hotels: Signal<Vec<Hotel>>, config: MapConfig) -> impl IntoView {
    let MapConfig {
        tile_layer_url,
        attribution,
        view: view_settings,
        marker_icon,
    } = config;

    let map = RwSignal::<Option<leaflet::Map>>::new(None);
    let map_view = Signal::derive(move || hotels.with(|h| select_map_view(h, &view_settings)));

    Effect::new(move |_| {
        let MapView { center, zoom } = map_view.get();
        let Some(map) = map.get_untracked() else {
            log::debug!("Leaflet map is not ready yet");
            return;
        };
        map.set_view(&LatLng::new(center.lat(), center.lng()), zoom);
    });

    let MapView { center, zoom } = map_view.get_untracked();
    let center = Position::new(center.lat(), center.lng());

    view! {
      <MapContainer
        class="h-full w-full"
        center
        zoom
        map=map.write_only()
        set_view=true
      >
        <TileLayer url=tile_layer_url attribution />
        <For
          each=move || keyed_hotels(hotels.get())
          key=|(key, _)| key.clone()
          children=move |(_, hotel)| view! { <HotelMarker hotel icon=marker_icon.clone() /> }
        />
      </MapContainer>
    }
}

#[component]
fn HotelMarker(hotel: Hotel, icon: MarkerIcon) -> impl IntoView {
    let Hotel {
        id,
        name,
        location,
        price,
        rating,
        image,
        coordinates,
    } = hotel;
    let MarkerIcon { url, size, anchor } = icon;

    let navigate = use_navigate();
    let detail_path = hotel_path(&id);

    let mouse_events = MouseEvents::new()
        .click(move |_| {
            log::debug!("Show hotel {detail_path}");
            navigate(&detail_path, NavigateOptions::default());
        })
        .mouse_over(|ev| {
            ev.target().unchecked_into::<leaflet::Layer>().open_popup();
        })
        .mouse_out(|ev| {
            ev.target().unchecked_into::<leaflet::Layer>().close_popup();
        });

    view! {
      <Marker
        position=position!(coordinates.lat(), coordinates.lng())
        icon_url=Some(url)
        icon_size=Some(size)
        icon_anchor=Some(anchor)
        mouse_events
      >
        <Tooltip permanent=true direction="top">
          <span class="font-semibold">{ price_label(price) }</span>
        </Tooltip>
        <Popup>
          <div class="flex w-[300px] p-2">
            <div class="flex-1 pr-3">
              <h3 class="text-lg font-semibold mb-1">{ name.clone() }</h3>
              <p class="text-gray-600">{ location }</p>
              <p class="text-gray-800 mt-1 font-medium">{ price_per_night_label(price) }</p>
              <p class="text-gray-800">"⭐ " { rating_label(rating) }</p>
            </div>
            <img
              src=image
              alt=name
              class="w-[120px] h-[100px] object-cover rounded-md"
            />
          </div>
        </Popup>
      </Marker>
    }
}
