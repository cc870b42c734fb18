use payloads::Amenity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: Vec<Amenity>,
    pub on_toggle: Callback<Amenity>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn AmenityPicker(props: &Props) -> Html {
    html! {
        <div class="flex flex-wrap gap-2">
            {for Amenity::ALL.into_iter().map(|amenity| {
                let selected = props.selected.contains(&amenity);
                let onclick = props.on_toggle.reform(move |_: MouseEvent| amenity);
                let class = if selected {
                    "px-3 py-1 rounded-full text-xs font-medium bg-neutral-900 text-white \
                     dark:bg-neutral-100 dark:text-neutral-900"
                } else {
                    "px-3 py-1 rounded-full text-xs font-medium border border-neutral-300 \
                     dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
                };
                html! {
                    <button type="button" {onclick} {class} disabled={props.disabled}>
                        {amenity.label()}
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AmenityListProps {
    pub amenities: Vec<Amenity>,
}

/// Read-only amenity chips.
#[function_component]
pub fn AmenityList(props: &AmenityListProps) -> Html {
    if props.amenities.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No amenities listed"}</p>
        };
    }
    html! {
        <div class="flex flex-wrap gap-2">
            {for props.amenities.iter().map(|amenity| html! {
                <span class="px-2 py-0.5 rounded-full text-xs bg-neutral-100 dark:bg-neutral-700 text-neutral-700 dark:text-neutral-300">
                    {amenity.label()}
                </span>
            })}
        </div>
    }
}
