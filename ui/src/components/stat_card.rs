use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800">
            <div class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                {&props.value}
            </div>
            <div class="text-sm text-neutral-600 dark:text-neutral-400">{&props.label}</div>
            if let Some(hint) = &props.hint {
                <div class="mt-1 text-xs text-neutral-500">{hint}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGroupProps {
    /// Says what the figures cover, e.g. "On this page".
    pub heading: AttrValue,
    pub children: Html,
}

#[function_component]
pub fn StatGroup(props: &StatGroupProps) -> Html {
    html! {
        <section class="mb-6">
            <h2 class="text-xs font-semibold uppercase tracking-wide text-neutral-500 mb-2">
                {&props.heading}
            </h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {props.children.clone()}
            </div>
        </section>
    }
}
