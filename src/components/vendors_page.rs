use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::models::{Vendor, VendorFilters};
use crate::services::vendor_service;
use crate::utils::listing::{filter_vendors, set_vendor_blocked, vendor_categories};

const STATUS_OPTIONS: [&str; 4] = ["approved", "pending", "blocked", "rejected"];

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[function_component(VendorsPage)]
pub fn vendors_page() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let vendors = use_state(Vec::<Vendor>::new);
    let categories = use_state(Vec::<String>::new);
    let loaded = use_state(|| false);
    let error = use_state(|| None::<String>);
    let category = use_state(String::new);
    let status = use_state(String::new);

    // Refetch whenever a filter changes; categories come from the full answer
    {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let vendors = vendors.clone();
        let categories = categories.clone();
        let loaded = loaded.clone();
        let error = error.clone();
        let filters = VendorFilters {
            category: non_empty(&category),
            status: non_empty(&status),
        };
        use_effect_with(filters, move |filters| {
            let filters = filters.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vendor_service::get_all(&client, &filters).await;
                if !mounted.is_mounted() {
                    return;
                }
                loaded.set(true);
                match result.into_result() {
                    Ok(all) => {
                        categories.set(vendor_categories(&all));
                        let shown = filter_vendors(
                            &all,
                            filters.category.as_deref(),
                            filters.status.as_deref(),
                        );
                        vendors.set(shown.into_iter().cloned().collect());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let on_toggle_block = {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let vendors = vendors.clone();
        let error = error.clone();
        Callback::from(move |(id, blocked): (String, bool)| {
            let client = client.clone();
            let mounted = mounted.clone();
            let vendors = vendors.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vendor_service::toggle_block(&client, &id, !blocked).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        let mut rows = (*vendors).clone();
                        set_vendor_blocked(&mut rows, &id, !blocked);
                        vendors.set(rows);
                    }
                }
            });
        })
    };

    let on_delete = {
        let client = auth.manager.client().clone();
        let vendors = vendors.clone();
        let error = error.clone();
        Callback::from(move |id: String| {
            let client = client.clone();
            let mounted = mounted.clone();
            let vendors = vendors.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vendor_service::delete(&client, &id).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => vendors.set(vendors.iter().filter(|v| v.id != id).cloned().collect()),
                }
            });
        })
    };

    let select_into = |handle: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            handle.set(select.value());
        })
    };

    let category_options = categories.iter().map(|option| {
        html! { <option value={option.clone()} selected={*category == *option}>{option.clone()}</option> }
    });
    let status_options = STATUS_OPTIONS.iter().map(|option| {
        html! { <option value={*option} selected={status.as_str() == *option}>{*option}</option> }
    });

    let body = vendors.iter().map(|vendor| {
        let on_block = {
            let on_toggle_block = on_toggle_block.clone();
            let id = vendor.id.clone();
            let blocked = vendor.is_blocked;
            Callback::from(move |_: MouseEvent| on_toggle_block.emit((id.clone(), blocked)))
        };
        let on_remove = {
            let on_delete = on_delete.clone();
            let id = vendor.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };
        let status = vendor.status.clone().unwrap_or_default();
        html! {
            <tr key={vendor.id.clone()}>
                <td>{vendor.vendor_id.clone().unwrap_or_else(|| vendor.id.clone())}</td>
                <td>{vendor.name.clone()}</td>
                <td>{vendor.category.clone().unwrap_or_default()}</td>
                <td>{vendor.current_pack.clone().unwrap_or_default()}</td>
                <td>{vendor.jobs_completed}</td>
                <td><span class={classes!("status-badge", status.clone())}>{status}</span></td>
                <td>
                    <button class="btn-toggle" onclick={on_block}>
                        { if vendor.is_blocked { "Unblock" } else { "Block" } }
                    </button>
                    <button class="btn-delete" onclick={on_remove}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="vendors-page">
            if let Some(message) = (*error).clone() {
                <div class="panel-error" role="alert">{message}</div>
            }

            <div class="filters">
                <select onchange={select_into(category.clone())}>
                    <option value="" selected={category.is_empty()}>{"All categories"}</option>
                    {for category_options}
                </select>
                <select onchange={select_into(status.clone())}>
                    <option value="" selected={status.is_empty()}>{"All statuses"}</option>
                    {for status_options}
                </select>
            </div>

            if !*loaded {
                <div class="spinner"></div>
            } else if vendors.is_empty() {
                <p class="empty-state">{"No vendors found"}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Vendor ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"Category"}</th>
                            <th>{"Pack"}</th>
                            <th>{"Jobs"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>{for body}</tbody>
                </table>
            }
        </section>
    }
}
