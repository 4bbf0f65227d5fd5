use leptos::*;
use leptos_router::*;

use hotelfinder_core::{
    entities::hotel::Hotel,
    usecases::{price_per_night_label, rating_label},
};

use crate::hotel_path;

#[component]
pub fn HotelCard(hotel: Hotel) -> impl IntoView {
    let Hotel {
        id,
        name,
        location,
        price,
        rating,
        image,
        ..
    } = hotel;

    view! {
      <div class="bg-white rounded-xl shadow-md overflow-hidden transition-transform duration-300 hover:scale-[1.02] group">
        <div class="h-60 overflow-hidden relative">
          <img
            src = image
            alt = name.clone()
            class="w-full h-full object-cover group-hover:scale-105 transition duration-500"
          />
          <div class="absolute bottom-4 right-4 bg-blue-600 text-white px-3 py-1 rounded-full text-sm font-medium">
            { price_per_night_label(price) }
          </div>
        </div>
        <div class="p-6">
          <div class="flex justify-between items-start mb-2">
            <h3 class="text-xl font-bold text-blue-900">{ name }</h3>
            <div class="flex items-center bg-blue-100 px-2 py-1 rounded">
              "⭐"
              <span class="ml-1 font-medium text-blue-800">{ rating_label(rating) }</span>
            </div>
          </div>
          <p class="text-blue-600 mb-4">{ location }</p>
          <A
            href = hotel_path(&id)
            class = "block text-center bg-blue-100 hover:bg-blue-200 text-blue-800 py-2 px-4 rounded-lg font-medium transition duration-300".to_string()
          >
            "View Details"
          </A>
        </div>
      </div>
    }
}
