use leptos::*;
use leptos_router::*;

use hotelfinder_boundary::into_hotels;
use hotelfinder_frontend_api as api;

pub mod config;

mod pages;
use pages::*;

mod components;
use components::*;

use self::config::Config;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- config -- //

    let config = Config::load().unwrap_or_else(|err| {
        log::error!("Unable to load configuration: {err}");
        Config::default()
    });
    let Config {
        api: api_config,
        map: map_config,
    } = config;

    // -- actions -- //

    let public_api = api::PublicApi::new(api_config.url);

    // Both pages share one collection that is fetched once.
    let fetch_hotels = Action::new(move |()| {
        let public_api = public_api.clone();
        async move {
            let result = public_api.hotels().await.map(into_hotels);
            match &result {
                Ok(hotels) => log::info!("Fetched {} hotels", hotels.len()),
                Err(err) => log::error!("Unable to fetch hotels: {err}"),
            }
            result
        }
    });

    fetch_hotels.dispatch(());

    // -- signals -- //

    let hotels = Signal::from(fetch_hotels.value());

    view! {
      <Router fallback = || view! { <NotFound /> }.into_view()>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home hotels /> }
            />
            <Route
              path=Page::Search.path()
              view=move || view! { <SearchResults hotels map_config = map_config.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
