use payloads::{
    BookingId, BookingStatus, LocationId,
    query::Mutation,
    requests::{BookingListParams, StatsParams},
    responses::{self, BookingStats},
    stats::summarize_bookings,
};
use yew::prelude::*;

use super::{PageHeader, filter_setter};
use crate::{
    components::{
        ConfirmationModal, LocationSelect, Modal, PaginationControls,
        StatCard, StatGroup, StatusBadge,
        fields::{SelectField, enum_options},
        status_badge::booking_tone,
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::{
        use_booking, use_booking_stats, use_bookings, use_mutation, use_title,
    },
    utils::{
        format::{money, percent},
        time::{format_period, format_timestamp},
    },
};

#[function_component]
pub fn BookingsPage() -> Html {
    use_title("Bookings");

    let location = use_state(String::new);
    let status = use_state(String::new);
    let page = use_state(|| 1u32);

    let viewing = use_state(|| None::<BookingId>);
    let cancelling = use_state(|| None::<responses::Booking>);
    let mutation = use_mutation();
    let toasts = use_toast();

    let location_id = location.parse().ok().map(LocationId);
    let bookings = use_bookings(BookingListParams {
        page: *page,
        location_id,
        status: BookingStatus::from_key(&status),
        ..Default::default()
    });
    let server_stats = use_booking_stats(StatsParams { location_id });

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |p: u32| page.set(p))
    };
    let on_view = {
        let viewing = viewing.clone();
        Callback::from(move |id: BookingId| viewing.set(Some(id)))
    };
    let close_view = {
        let viewing = viewing.clone();
        Callback::from(move |_: ()| viewing.set(None))
    };
    let ask_cancel = {
        let cancelling = cancelling.clone();
        Callback::from(move |booking: responses::Booking| cancelling.set(Some(booking)))
    };
    let close_cancel = {
        let cancelling = cancelling.clone();
        Callback::from(move |_: ()| cancelling.set(None))
    };

    let on_cancel = {
        let cancelling = cancelling.clone();
        let mutation = mutation.clone();
        Callback::from(move |_: ()| {
            let Some(booking) = (*cancelling).clone() else {
                return;
            };
            let booking_id = booking.id;
            let request =
                async move { get_api_client().cancel_booking(&booking_id).await };
            let on_success = {
                let toasts = toasts.clone();
                let cancelling = cancelling.clone();
                Callback::from(move |cancelled: responses::Booking| {
                    toasts.success(format!(
                        "Cancelled booking for {}",
                        cancelled.details.member_name
                    ));
                    cancelling.set(None);
                })
            };
            let on_error = {
                let toasts = toasts.clone();
                let cancelling = cancelling.clone();
                Callback::from(move |e: payloads::ClientError| {
                    toasts.error(format!("Could not cancel booking: {e}"));
                    cancelling.set(None);
                })
            };
            mutation.run(
                Mutation::CancelBooking(booking_id),
                request,
                on_success,
                on_error,
            );
        })
    };

    let scope = if location_id.is_some() { "At this location" } else { "All bookings" };

    html! {
        <div class="space-y-6">
            <PageHeader title="Bookings" subtitle="Reservations across every space" />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <LocationSelect
                    value={(*location).clone()}
                    on_change={filter_setter(&location, &page)}
                    empty_label="All locations"
                />
                <SelectField
                    label="Status"
                    value={(*status).clone()}
                    options={enum_options(&BookingStatus::ALL, BookingStatus::key, BookingStatus::label)}
                    on_change={filter_setter(&status, &page)}
                    empty_label="All statuses"
                />
            </div>

            {server_stats.render("booking statistics", |stats, _, _| booking_stat_group(scope, stats))}

            {bookings.render("bookings", |data, is_loading, error| {
                let page_stats = summarize_bookings(data.items.iter().map(|b| &b.details));
                html! {
                    <>
                        {booking_stat_group("On this page", &page_stats)}

                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }

                        <BookingTable
                            bookings={data.items.clone()}
                            on_view={on_view.clone()}
                            on_cancel={ask_cancel.clone()}
                        />

                        <PaginationControls
                            pagination={data.pagination}
                            on_page_change={on_page_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}

            if let Some(booking_id) = *viewing {
                <BookingDetailModal {booking_id} on_close={close_view} />
            }
            if let Some(booking) = (*cancelling).clone() {
                <ConfirmationModal
                    title="Cancel booking"
                    message={format!(
                        "The booking for {} in {} will be cancelled.",
                        booking.details.member_name, booking.space_name
                    )}
                    confirm_text="Cancel booking"
                    on_confirm={on_cancel.clone()}
                    on_close={close_cancel}
                    is_loading={mutation.is_pending()}
                />
            }
        </div>
    }
}

fn booking_stat_group(heading: &'static str, stats: &BookingStats) -> Html {
    html! {
        <StatGroup {heading}>
            <StatCard label="Bookings" value={stats.total_bookings.to_string()}
                hint={format!("{} pending, {} confirmed", stats.pending, stats.confirmed)} />
            <StatCard label="Revenue" value={money(stats.total_revenue)} />
            <StatCard label="Average booking" value={money(stats.average_booking_value)} />
            <StatCard label="Cancellation rate" value={percent(stats.cancellation_rate)}
                hint={format!("{} cancelled", stats.cancelled)} />
        </StatGroup>
    }
}

#[derive(Properties, PartialEq)]
struct BookingTableProps {
    bookings: Vec<responses::Booking>,
    on_view: Callback<BookingId>,
    on_cancel: Callback<responses::Booking>,
}

#[function_component]
fn BookingTable(props: &BookingTableProps) -> Html {
    if props.bookings.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"No bookings match these filters."}</p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="text-left text-neutral-500 border-b border-neutral-200 dark:border-neutral-700">
                        <th class="py-2 pr-4">{"Member"}</th>
                        <th class="py-2 pr-4">{"Space"}</th>
                        <th class="py-2 pr-4">{"When"}</th>
                        <th class="py-2 pr-4">{"Amount"}</th>
                        <th class="py-2 pr-4">{"Status"}</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.bookings.iter().map(|booking| {
                        let details = &booking.details;
                        let booking_id = booking.id;
                        let on_view = props.on_view.reform(move |_: MouseEvent| booking_id);
                        let on_cancel = {
                            let booking = booking.clone();
                            props.on_cancel.reform(move |_: MouseEvent| booking.clone())
                        };
                        html! {
                            <tr key={booking.id.to_string()} class="border-b border-neutral-100 dark:border-neutral-800">
                                <td class="py-2 pr-4">
                                    <div class="font-medium">{&details.member_name}</div>
                                    <div class="text-neutral-500">{&details.member_email}</div>
                                </td>
                                <td class="py-2 pr-4">{&booking.space_name}</td>
                                <td class="py-2 pr-4">{format_period(details.start_at, details.end_at)}</td>
                                <td class="py-2 pr-4">{money(details.total_amount)}</td>
                                <td class="py-2 pr-4">
                                    <StatusBadge label={details.status.label()} tone={booking_tone(details.status)} />
                                </td>
                                <td class="py-2 text-right space-x-3">
                                    <button onclick={on_view} class="hover:underline">{"View"}</button>
                                    if details.status.is_active() {
                                        <button onclick={on_cancel} class="text-red-600 hover:underline">{"Cancel"}</button>
                                    }
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    booking_id: BookingId,
    on_close: Callback<()>,
}

#[function_component]
fn BookingDetailModal(props: &DetailProps) -> Html {
    let booking = use_booking(props.booking_id);

    html! {
        <Modal on_close={props.on_close.clone()} title="Booking">
            {booking.render("booking", |booking, _, _| {
                let details = &booking.details;
                html! {
                    <dl class="grid grid-cols-3 gap-y-2 text-sm">
                        <dt class="text-neutral-500">{"Member"}</dt>
                        <dd class="col-span-2">{format!("{} <{}>", details.member_name, details.member_email)}</dd>
                        <dt class="text-neutral-500">{"Space"}</dt>
                        <dd class="col-span-2">{&booking.space_name}</dd>
                        <dt class="text-neutral-500">{"Period"}</dt>
                        <dd class="col-span-2">{format_period(details.start_at, details.end_at)}</dd>
                        <dt class="text-neutral-500">{"Billed"}</dt>
                        <dd class="col-span-2">
                            {format!("{} · billed by the {}", money(details.total_amount), details.rate_tier.label())}
                        </dd>
                        <dt class="text-neutral-500">{"Status"}</dt>
                        <dd class="col-span-2">
                            <StatusBadge label={details.status.label()} tone={booking_tone(details.status)} />
                        </dd>
                        if let Some(notes) = &details.notes {
                            <dt class="text-neutral-500">{"Notes"}</dt>
                            <dd class="col-span-2">{notes}</dd>
                        }
                        <dt class="text-neutral-500">{"Booked"}</dt>
                        <dd class="col-span-2">{format_timestamp(booking.created_at)}</dd>
                    </dl>
                }
            })}
        </Modal>
    }
}
