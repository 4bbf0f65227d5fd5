use leptos::*;
use leptos_router::*;

use hotelfinder_core::{entities::hotel::Hotel, usecases::*};

use crate::{api, components::*, config::MapConfig};

#[component]
pub fn SearchResults(
    hotels: Signal<Option<Result<Vec<Hotel>, api::Error>>>,
    map_config: MapConfig,
) -> impl IntoView {
    // -- signals -- //

    let location = use_location();

    // -- memos -- //

    let criteria = create_memo(move |_| parse_search_query(&location.search.get()));

    let catalogue = create_memo(move |_| hotels.with(CatalogueState::from_fetched));

    let found = create_memo(move |_| {
        let destination = criteria.with(|c| c.destination.clone());
        catalogue.with(|c| filter_hotels(c.hotels(), &destination))
    });

    let fetch_status = create_memo(move |_| {
        catalogue.with(|c| match c {
            CatalogueState::Loading => None,
            CatalogueState::Failed => Some(false),
            CatalogueState::Loaded(_) => Some(true),
        })
    });

    view! {
      <div class="min-h-screen bg-gray-50">
        <div class="container mx-auto px-4 py-8">
          <h1 class="text-3xl font-bold">
            { move || criteria.with(|c| results_title(&c.destination)) }
          </h1>
          <p class="text-gray-600 mb-6">
            { move || criteria.with(summarize_stay) }
          </p>
          { move || match fetch_status.get() {
              None => view! { <Loading /> }.into_view(),
              Some(false) => view! { <FetchError /> }.into_view(),
              Some(true) => {
                let map_config = map_config.clone();
                view! {
                  <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-2/3 space-y-6">
                      <Show
                        when = move || found.with(|h| !h.is_empty())
                        fallback = || view! { <p class="text-gray-500">"No hotels match your search."</p> }
                      >
                        <For
                          each = move || keyed_hotels(found.get())
                          key = |(key, _)| key.clone()
                          children = |(_, hotel)| view! { <HotelCard hotel /> }
                        />
                      </Show>
                    </div>
                    <div class="md:w-1/3 h-[500px] sticky top-24">
                      <Map hotels = found.into() config = map_config />
                    </div>
                  </div>
                }.into_view()
              }
            }
          }
        </div>
      </div>
    }
}
