use payloads::{BookingStatus, LocationStatus, SpaceStatus};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Neutral,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Good => "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300",
            Tone::Warn => "bg-amber-100 text-amber-800 dark:bg-amber-900/30 dark:text-amber-300",
            Tone::Bad => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300",
            Tone::Neutral => "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300",
        }
    }
}

pub fn location_tone(status: LocationStatus) -> Tone {
    match status {
        LocationStatus::Active => Tone::Good,
        LocationStatus::Maintenance => Tone::Warn,
        LocationStatus::Inactive => Tone::Neutral,
    }
}

pub fn space_tone(status: SpaceStatus) -> Tone {
    match status {
        SpaceStatus::Available => Tone::Good,
        SpaceStatus::Occupied | SpaceStatus::Reserved => Tone::Warn,
        SpaceStatus::Maintenance => Tone::Bad,
        SpaceStatus::Inactive => Tone::Neutral,
    }
}

pub fn booking_tone(status: BookingStatus) -> Tone {
    match status {
        BookingStatus::Confirmed | BookingStatus::CheckedIn => Tone::Good,
        BookingStatus::Pending => Tone::Warn,
        BookingStatus::Cancelled => Tone::Bad,
        BookingStatus::Completed => Tone::Neutral,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub tone: Tone,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    html! {
        <span class={format!("px-2 py-0.5 rounded-full text-xs font-medium {}", props.tone.class())}>
            {&props.label}
        </span>
    }
}
