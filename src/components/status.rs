use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
      <div class="min-h-screen flex items-center justify-center">"Loading..."</div>
    }
}

/// The error itself is logged where the request fails.
#[component]
pub fn FetchError() -> impl IntoView {
    view! {
      <div class="min-h-screen flex items-center justify-center text-red-500">
        "Failed to fetch hotels"
      </div>
    }
}
