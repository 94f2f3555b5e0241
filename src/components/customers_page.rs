use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::models::{Customer, CustomerFilters};
use crate::services::customer_service;
use crate::utils::listing::{customer_pack_options, filter_customers, set_customer_blocked, visible_slice};

const STATUS_OPTIONS: [&str; 3] = ["Active", "Pending", "Expired"];

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let customers = use_state(|| None::<Vec<Customer>>);
    let error = use_state(|| None::<String>);
    let pack = use_state(String::new);
    let status = use_state(String::new);
    let show_all = use_state(|| false);

    {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let customers = customers.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = customer_service::get_all(&client, &CustomerFilters::default()).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.into_result() {
                    Ok(loaded) => customers.set(Some(loaded)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let on_toggle_block = {
        let client = auth.manager.client().clone();
        let customers = customers.clone();
        let error = error.clone();
        Callback::from(move |(id, blocked): (String, bool)| {
            let client = client.clone();
            let mounted = mounted.clone();
            let customers = customers.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if blocked {
                    customer_service::unblock(&client, &id).await
                } else {
                    customer_service::block(&client, &id).await
                };
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        let mut rows = (*customers).clone().unwrap_or_default();
                        set_customer_blocked(&mut rows, &id, !blocked);
                        customers.set(Some(rows));
                    }
                }
            });
        })
    };

    let on_pack = {
        let pack = pack.clone();
        let show_all = show_all.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            pack.set(select.value());
            show_all.set(false);
        })
    };

    let on_status = {
        let status = status.clone();
        let show_all = show_all.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value());
            show_all.set(false);
        })
    };

    let on_show_all = {
        let show_all = show_all.clone();
        Callback::from(move |_: MouseEvent| show_all.set(true))
    };

    let Some(all) = (*customers).clone() else {
        return html! {
            <>
                if let Some(message) = (*error).clone() {
                    <div class="panel-error" role="alert">{message}</div>
                } else {
                    <div class="spinner"></div>
                }
            </>
        };
    };

    let filtered = filter_customers(&all, Some(pack.as_str()), Some(status.as_str()));
    let rows = visible_slice(&filtered, *show_all);
    let hidden = filtered.len() - rows.len();

    let pack_options = customer_pack_options(&all).into_iter().map(|option| {
        let selected = *pack == option;
        html! { <option value={option.clone()} {selected}>{option}</option> }
    });
    let status_options = STATUS_OPTIONS.iter().map(|option| {
        html! { <option value={*option} selected={status.as_str() == *option}>{*option}</option> }
    });

    let body = rows.iter().map(|customer| {
        let onclick = {
            let on_toggle_block = on_toggle_block.clone();
            let id = customer.id.clone();
            let blocked = customer.is_blocked;
            Callback::from(move |_: MouseEvent| on_toggle_block.emit((id.clone(), blocked)))
        };
        let shown_id = customer.customer_id.clone().unwrap_or_else(|| customer.id.clone());
        html! {
            <tr key={customer.id.clone()}>
                <td>{shown_id}</td>
                <td>{customer.name.clone()}</td>
                <td>{customer.email.clone().unwrap_or_default()}</td>
                <td>{customer.phone.clone().unwrap_or_default()}</td>
                <td>{customer.current_pack.clone().unwrap_or_default()}</td>
                <td>{customer.status.clone().unwrap_or_default()}</td>
                <td>{customer.expiry_date.clone().unwrap_or_default()}</td>
                <td>
                    <button class={classes!("btn-toggle", customer.is_blocked.then_some("blocked"))} {onclick}>
                        { if customer.is_blocked { "Unblock" } else { "Block" } }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="customers-page">
            if let Some(message) = (*error).clone() {
                <div class="panel-error" role="alert">{message}</div>
            }

            <div class="filters">
                <select onchange={on_pack}>
                    <option value="" selected={pack.is_empty()}>{"All packs"}</option>
                    {for pack_options}
                </select>
                <select onchange={on_status}>
                    <option value="" selected={status.is_empty()}>{"All statuses"}</option>
                    {for status_options}
                </select>
            </div>

            if filtered.is_empty() {
                <p class="empty-state">{"No customers found"}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Customer ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Pack"}</th>
                            <th>{"Status"}</th>
                            <th>{"Expiry"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>{for body}</tbody>
                </table>
            }

            if hidden > 0 {
                <button class="btn-more" onclick={on_show_all}>{format!("View More ({} more)", hidden)}</button>
            }
        </section>
    }
}
