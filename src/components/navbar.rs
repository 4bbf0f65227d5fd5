use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold text-blue-900">
            <A href = Page::Home.path()>"HotelFinder"</A>
          </div>

          // Menu items
          <div class="hidden space-x-6 md:flex">
            <MenuItems />
          </div>

          // Hamburger Icon
          <button
            class = {move ||
              if menu_open.get() {
                "open block hamburger md:hidden focus:outline-none"
              } else {
                "block hamburger md:hidden focus:outline-none"
              }
            }
            on:click = move |_| set_menu_open.update(|s|*s = !*s)
          >
            <span class="hamburger-top"></span>
            <span class="hamburger-middle"></span>
            <span class="hamburger-bottom"></span>
          </button>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              } else {
                "hidden absolute flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              }
            }
            on:click = move |_| set_menu_open.set(false)
          >
            <MenuItems />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn MenuItems() -> impl IntoView {
    view! {
      <MenuItem page = Page::Home label = "Home" />
      <MenuItem page = Page::Search label = "Search" />
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
