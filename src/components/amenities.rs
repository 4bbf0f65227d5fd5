use leptos::*;

use hotelfinder_core::entities::amenity::Amenity;

#[component]
pub fn Amenities() -> impl IntoView {
    view! {
      <div class="bg-blue-800 py-16 text-white">
        <div class="container mx-auto px-4">
          <h2 class="text-3xl font-bold text-center mb-4">"Our Amenities"</h2>
          <p class="text-center text-blue-200 mb-12">"Everything you need for a perfect stay"</p>
          <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
            {
              Amenity::all()
                .map(|amenity| view! {
                  <div class="flex flex-col items-center p-6 bg-blue-700 rounded-xl hover:bg-blue-600 transition-colors">
                    <div class="text-2xl mb-3">{ amenity.icon() }</div>
                    <h3 class="text-lg font-medium">{ amenity.to_string() }</h3>
                  </div>
                })
                .collect_view()
            }
          </div>
        </div>
      </div>
    }
}
