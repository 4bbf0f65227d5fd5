use leptos::*;
use leptos_router::*;

use hotelfinder_core::entities::search::{SearchCriteria, DEFAULT_GUESTS};

use crate::search_path;

const INPUT_CLASS: &str = "w-full p-3 pl-10 border border-blue-200 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-blue-50";

#[component]
pub fn SearchForm() -> impl IntoView {
    // -- signals -- //

    let destination = RwSignal::new(String::new());
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let guests = RwSignal::new(DEFAULT_GUESTS.to_string());

    // -- callbacks -- //

    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let criteria = SearchCriteria {
            destination: destination.get_untracked(),
            check_in: check_in.get_untracked(),
            check_out: check_out.get_untracked(),
            guests: guests.get_untracked(),
        };
        let path = search_path(&criteria);
        log::debug!("Search hotels: {path}");
        navigate(&path, NavigateOptions::default());
    };

    view! {
      <div class="container mx-auto px-4 -mt-20 relative z-10">
        <form
          class="bg-white rounded-xl shadow-xl p-6 border border-blue-100"
          on:submit = on_submit
        >
          <h2 class="text-2xl font-bold text-blue-900 mb-6">"Book your dream hotel"</h2>
          <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <FormField label = "Destination" icon = "🔍">
              <input
                type="text"
                class=INPUT_CLASS
                placeholder="Where are you going?"
                prop:value = move || destination.get()
                on:input = move |ev| destination.set(event_target_value(&ev))
              />
            </FormField>
            <FormField label = "Check-in" icon = "📅">
              <input
                type="date"
                class=INPUT_CLASS
                prop:value = move || check_in.get()
                on:input = move |ev| check_in.set(event_target_value(&ev))
              />
            </FormField>
            <FormField label = "Check-out" icon = "📅">
              <input
                type="date"
                class=INPUT_CLASS
                prop:value = move || check_out.get()
                on:input = move |ev| check_out.set(event_target_value(&ev))
              />
            </FormField>
            <FormField label = "Guests" icon = "👤">
              <input
                type="number"
                min="1"
                class=INPUT_CLASS
                prop:value = move || guests.get()
                on:input = move |ev| guests.set(event_target_value(&ev))
              />
            </FormField>
          </div>
          <button
            type="submit"
            class="mt-6 w-full bg-blue-600 hover:bg-blue-700 text-white py-3 px-6 rounded-lg font-medium transition duration-300 shadow-md hover:shadow-lg text-center block"
          >
            "Search Hotels"
          </button>
        </form>
      </div>
    }
}

#[component]
fn FormField(label: &'static str, icon: &'static str, children: Children) -> impl IntoView {
    view! {
      <div>
        <label class="block text-sm font-medium text-blue-800 mb-1">{ label }</label>
        <div class="relative">
          { children() }
          <span class="absolute left-3 top-3 text-blue-400">{ icon }</span>
        </div>
      </div>
    }
}
