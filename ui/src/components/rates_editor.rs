use payloads::{
    RateTier,
    forms::{FieldErrors, RatesInput, rate_field},
};
use yew::prelude::*;

use super::fields::{FieldError, TextField};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rates: RatesInput,
    /// `rates` for spaces, `pricing` for space types.
    pub prefix: AttrValue,
    pub errors: FieldErrors,
    pub on_change: Callback<RatesInput>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Amount inputs for every billing tier. Blank tiers aren't offered.
#[function_component]
pub fn RatesEditor(props: &Props) -> Html {
    let overall = props
        .errors
        .get(&props.prefix)
        .map(|e| AttrValue::from(e.to_string()));

    html! {
        <div>
            <div class="grid grid-cols-2 gap-3">
                {for RateTier::ALL.into_iter().map(|tier| {
                    let on_change = {
                        let rates = props.rates.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |value: String| {
                            let mut rates = rates.clone();
                            rates.set(tier, value);
                            on_change.emit(rates);
                        })
                    };
                    let field = rate_field(&props.prefix, tier);
                    html! {
                        <TextField
                            label={format!("Per {}", tier.label())}
                            value={props.rates.get(tier).to_string()}
                            input_type="number"
                            placeholder="Not offered"
                            error={props.errors.get(&field).map(|e| AttrValue::from(e.to_string()))}
                            {on_change}
                            disabled={props.disabled}
                        />
                    }
                })}
            </div>
            <FieldError error={overall} />
        </div>
    }
}

