use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <div class="mx-auto text-center max-w-7xl px-4 mt-12 pb-16 sm:px-6 sm:pb-24 lg:px-8">
        <h2 class="text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">"Page not found"</h2>
        <p class="mt-4 text-gray-500">
          <A href=Page::Home.path() class="text-blue-600 hover:text-blue-800".to_string()>"Back to the start page"</A>
        </p>
      </div>
    }
}
