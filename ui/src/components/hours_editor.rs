use payloads::forms::{DayHoursInput, FieldErrors, hours_field};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub hours: Vec<DayHoursInput>,
    /// Field path the per-day errors are keyed under.
    pub prefix: AttrValue,
    pub errors: FieldErrors,
    pub on_change: Callback<Vec<DayHoursInput>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// One row per weekday: an open toggle and opening/closing times.
#[function_component]
pub fn HoursEditor(props: &Props) -> Html {
    let update = |index: usize, edit: fn(&mut DayHoursInput, String)| {
        let hours = props.hours.clone();
        let on_change = props.on_change.clone();
        move |value: String| {
            let mut hours = hours.clone();
            if let Some(day) = hours.get_mut(index) {
                edit(day, value);
            }
            on_change.emit(hours);
        }
    };

    html! {
        <div class="space-y-2">
            {for props.hours.iter().enumerate().map(|(index, day)| {
                let error = props
                    .errors
                    .get(&hours_field(&props.prefix, day.day))
                    .map(|e| AttrValue::from(e.to_string()));

                let on_toggle = {
                    let update = update(index, |d, _| d.is_open = !d.is_open);
                    Callback::from(move |_: MouseEvent| update(String::new()))
                };
                let on_open = {
                    let update = update(index, |d, v| d.open_time = v);
                    Callback::from(move |e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        update(input.value())
                    })
                };
                let on_close = {
                    let update = update(index, |d, v| d.close_time = v);
                    Callback::from(move |e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        update(input.value())
                    })
                };

                html! {
                    <div key={day.day.key()}>
                        <div class="flex items-center gap-3">
                            <label class="w-32 inline-flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                                <input
                                    type="checkbox"
                                    checked={day.is_open}
                                    onclick={on_toggle}
                                    disabled={props.disabled}
                                    class="h-4 w-4 rounded"
                                />
                                {day.day.label()}
                            </label>
                            if day.is_open {
                                <input
                                    type="time"
                                    value={day.open_time.clone()}
                                    onchange={on_open}
                                    disabled={props.disabled}
                                    class="px-2 py-1 text-sm border rounded-md border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-700"
                                />
                                <span class="text-sm text-neutral-500">{"to"}</span>
                                <input
                                    type="time"
                                    value={day.close_time.clone()}
                                    onchange={on_close}
                                    disabled={props.disabled}
                                    class="px-2 py-1 text-sm border rounded-md border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-700"
                                />
                            } else {
                                <span class="text-sm text-neutral-500">{"Closed"}</span>
                            }
                        </div>
                        <super::fields::FieldError error={error} />
                    </div>
                }
            })}
        </div>
    }
}
