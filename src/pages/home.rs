use leptos::*;
use leptos_router::*;

use hotelfinder_core::{
    entities::hotel::Hotel,
    usecases::{keyed_hotels, CatalogueState},
};

use crate::{api, components::*, Page};

#[component]
pub fn Home(hotels: Signal<Option<Result<Vec<Hotel>, api::Error>>>) -> impl IntoView {
    let catalogue = create_memo(move |_| hotels.with(CatalogueState::from_fetched));

    move || match catalogue.get() {
        CatalogueState::Loading => view! { <Loading /> }.into_view(),
        CatalogueState::Failed => view! { <FetchError /> }.into_view(),
        loaded @ CatalogueState::Loaded(_) => {
            let featured = loaded.featured().to_vec();
            view! {
              <div class="min-h-screen bg-gradient-to-b from-blue-50 to-white">
                <Hero />
                <SearchForm />
                <FeaturedHotels hotels = featured />
                <Amenities />
                <CallToAction />
              </div>
            }
            .into_view()
        }
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
      <div class="relative h-[500px] bg-blue-800 overflow-hidden">
        <div class="absolute inset-0 bg-gradient-to-r from-blue-900/80 to-blue-700/80"></div>
        <div class="absolute inset-0 flex items-center justify-center">
          <div class="text-center px-4 max-w-3xl">
            <h1 class="text-4xl md:text-5xl font-bold text-white mb-6">"Find Your Perfect Stay"</h1>
            <p class="text-xl text-blue-100 mb-8">"Discover and book luxury hotels around the world"</p>
          </div>
        </div>
      </div>
    }
}

#[component]
fn FeaturedHotels(hotels: Vec<Hotel>) -> impl IntoView {
    view! {
      <div class="container mx-auto px-4 py-16">
        <h2 class="text-3xl font-bold text-center mb-4 text-blue-900">"Featured Hotels"</h2>
        <p class="text-center text-blue-600 mb-12">"Discover our most popular destinations"</p>
        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
          <For
            each = move || keyed_hotels(hotels.clone())
            key = |(key, _)| key.clone()
            children = |(_, hotel)| view! { <HotelCard hotel /> }
          />
        </div>
      </div>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
      <div class="py-16 bg-gradient-to-r from-blue-600 to-blue-800 text-white">
        <div class="container mx-auto px-4 text-center">
          <h2 class="text-3xl font-bold mb-4">"Ready for an unforgettable experience?"</h2>
          <p class="text-xl mb-8 text-blue-100">"Join thousands of satisfied guests who've enjoyed our premium hospitality"</p>
          <A
            href = Page::Search.path()
            class = "inline-block bg-white text-blue-800 hover:bg-blue-100 py-3 px-8 rounded-lg font-bold text-lg transition duration-300 shadow-lg hover:shadow-xl".to_string()
          >
            "Book Your Stay Now"
          </A>
        </div>
      </div>
    }
}
