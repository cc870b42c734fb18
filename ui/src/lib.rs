use payloads::APIClient;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::State;

use components::{ToastContainer, layout::MainLayout};
use contexts::toast::ToastProvider;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Set at build time when the API is served from elsewhere
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    logs::init_logging();
    yew::Renderer::<App>::new().render();
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/locations")]
    Locations,
    #[at("/locations/:id")]
    LocationDetail { id: String },
    #[at("/spaces")]
    Spaces,
    #[at("/spaces/:id")]
    SpaceDetail { id: String },
    #[at("/space-types")]
    SpaceTypes,
    #[at("/bookings")]
    Bookings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    use pages::*;

    match routes {
        Route::Home | Route::Locations => html! { <LocationsPage /> },
        Route::LocationDetail { id } => match id.parse() {
            Ok(id) => html! { <LocationDetailPage location_id={payloads::LocationId(id)} /> },
            Err(_) => html! { <NotFoundPage /> },
        },
        Route::Spaces => html! { <SpacesPage /> },
        Route::SpaceDetail { id } => match id.parse() {
            Ok(id) => html! { <SpaceDetailPage space_id={payloads::SpaceId(id)} /> },
            Err(_) => html! { <NotFoundPage /> },
        },
        Route::SpaceTypes => html! { <SpaceTypesPage /> },
        Route::Bookings => html! { <BookingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
