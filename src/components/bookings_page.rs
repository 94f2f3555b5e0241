use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::models::Booking;
use crate::services::booking_service;
use crate::utils::listing::{booking_stats, filter_bookings};

#[function_component(BookingsPage)]
pub fn bookings_page() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let bookings = use_state(|| None::<Vec<Booking>>);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);

    {
        let client = auth.manager.client().clone();
        let bookings = bookings.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = booking_service::get_all(&client).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.into_result() {
                    Ok(loaded) => bookings.set(Some(loaded)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    if let Some(message) = (*error).clone() {
        return html! { <div class="panel-error" role="alert">{message}</div> };
    }

    let Some(all) = (*bookings).clone() else {
        return html! { <div class="spinner"></div> };
    };

    let stats = booking_stats(&all);
    let matches = filter_bookings(&all, &search);

    let body = matches.iter().map(|booking| {
        html! {
            <tr key={booking.id.clone()}>
                <td>{booking.id.clone()}</td>
                <td>{booking.customer_name.clone().unwrap_or_default()}</td>
                <td>{booking.customer_id.clone().unwrap_or_default()}</td>
                <td>{booking.booking_status.clone().unwrap_or_default()}</td>
                <td>{booking.created_at.clone().unwrap_or_default()}</td>
                <td>{booking.vendor_id.clone().unwrap_or_default()}</td>
                <td>{booking.service_summary()}</td>
            </tr>
        }
    });

    html! {
        <section class="bookings-page">
            <div class="stats-grid">
                <div class="stat-card">
                    <p class="stat-label">{"Total Bookings"}</p>
                    <p class="stat-value">{stats.total}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Completed"}</p>
                    <p class="stat-value">{stats.completed}</p>
                </div>
            </div>

            <input
                type="search"
                class="search-input"
                placeholder="Search by customer or service"
                value={(*search).clone()}
                oninput={on_search}
            />

            if matches.is_empty() {
                <p class="empty-state">{"No bookings found"}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Booking ID"}</th>
                            <th>{"Customer Name"}</th>
                            <th>{"Customer ID"}</th>
                            <th>{"Status"}</th>
                            <th>{"Date"}</th>
                            <th>{"Vendor ID"}</th>
                            <th>{"Services"}</th>
                        </tr>
                    </thead>
                    <tbody>{for body}</tbody>
                </table>
            }
        </section>
    }
}
