pub mod bookings;
pub mod location_detail;
pub mod locations;
pub mod not_found;
pub mod space_detail;
pub mod space_types;
pub mod spaces;

pub use bookings::BookingsPage;
pub use location_detail::LocationDetailPage;
pub use locations::LocationsPage;
pub use not_found::NotFoundPage;
pub use space_detail::SpaceDetailPage;
pub use space_types::SpaceTypesPage;
pub use spaces::SpacesPage;

use yew::prelude::*;

/// Callback for a filter input: stores the value and goes back to page 1.
fn filter_setter(
    target: &UseStateHandle<String>,
    page: &UseStateHandle<u32>,
) -> Callback<String> {
    let target = target.clone();
    let page = page.clone();
    Callback::from(move |value: String| {
        target.set(value);
        page.set(1);
    })
}

#[derive(Properties, PartialEq)]
struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Actions on the right, usually a create button.
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
fn PageHeader(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex justify-between items-center">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&props.title}
                </h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">{subtitle}</p>
                }
            </div>
            <div class="flex gap-2">{props.children.clone()}</div>
        </div>
    }
}
