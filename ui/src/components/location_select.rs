use yew::prelude::*;

use super::fields::SelectField;
use crate::hooks::use_location_options;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Selected location id, empty for none.
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("Location"))]
    pub label: AttrValue,
    /// Label of the empty choice, e.g. "All locations".
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn LocationSelect(props: &Props) -> Html {
    let options = use_location_options()
        .into_iter()
        .map(|(id, name)| (AttrValue::from(id.to_string()), AttrValue::from(name)))
        .collect::<Vec<_>>();

    html! {
        <SelectField
            label={props.label.clone()}
            value={props.value.clone()}
            {options}
            on_change={props.on_change.clone()}
            empty_label={props.empty_label.clone()}
            error={props.error.clone()}
            disabled={props.disabled}
        />
    }
}
