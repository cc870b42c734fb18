use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Locations", Route::Locations),
    ("Spaces", Route::Spaces),
    ("Space types", Route::SpaceTypes),
    ("Bookings", Route::Bookings),
];

/// Which nav item a route belongs to. Detail pages highlight their list.
fn section(route: &Route) -> Option<Route> {
    match route {
        Route::Home | Route::Locations | Route::LocationDetail { .. } => {
            Some(Route::Locations)
        }
        Route::Spaces | Route::SpaceDetail { .. } => Some(Route::Spaces),
        Route::SpaceTypes => Some(Route::SpaceTypes),
        Route::Bookings => Some(Route::Bookings),
        Route::NotFound => None,
    }
}

#[function_component]
pub fn Header() -> Html {
    let active = use_route::<Route>().as_ref().and_then(section);

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Coworking"}
                    </Link<Route>>
                    <nav class="flex items-center gap-1">
                        {for NAV_ITEMS.iter().map(|(title, route)| {
                            let classes = if active.as_ref() == Some(route) {
                                "px-3 py-2 rounded-md text-sm font-medium \
                                 bg-neutral-100 dark:bg-neutral-700 text-neutral-900 dark:text-white"
                            } else {
                                "px-3 py-2 rounded-md text-sm font-medium \
                                 text-neutral-600 dark:text-neutral-400 \
                                 hover:text-neutral-900 dark:hover:text-white"
                            };
                            html! {
                                <Link<Route> to={route.clone()} {classes}>{*title}</Link<Route>>
                            }
                        })}
                    </nav>
                </div>
            </div>
        </header>
    }
}
