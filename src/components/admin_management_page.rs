// ============================================================================
// ADMIN MANAGEMENT - Super-admin only: create, enable/disable, delete admins
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::models::{Admin, AdminRole, AdminUpdate, NewAdmin};
use crate::services::admin_service;

const ADMIN_FIELDS_REQUIRED: &str = "Name, email and password are required";

#[function_component(AdminManagementPage)]
pub fn admin_management_page() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let admins = use_state(|| None::<Vec<Admin>>);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let saving = use_state(|| false);
    // Bumped after every successful change to refetch the list
    let revision = use_state(|| 0u32);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let role_ref = use_node_ref();

    let current_id = auth.admin().map(|admin| admin.id.clone()).unwrap_or_default();

    {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let admins = admins.clone();
        let error = error.clone();
        use_effect_with(*revision, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::get_all(&client).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.into_result() {
                    Ok(loaded) => admins.set(Some(loaded)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let on_create = {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let error = error.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        let revision = revision.clone();
        let refs = [name_ref.clone(), email_ref.clone(), password_ref.clone()];
        let role_ref = role_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            let inputs: Vec<HtmlInputElement> = refs
                .iter()
                .filter_map(NodeRef::cast::<HtmlInputElement>)
                .collect();
            let value_at = |i: usize| inputs.get(i).map(HtmlInputElement::value).unwrap_or_default();
            let role = match role_ref.cast::<HtmlSelectElement>().map(|s| s.value()).as_deref() {
                Some("super-admin") => AdminRole::SuperAdmin,
                _ => AdminRole::Admin,
            };
            let admin = NewAdmin {
                name: value_at(0).trim().to_string(),
                email: value_at(1).trim().to_string(),
                password: value_at(2),
                role,
            };

            notice.set(None);
            if !admin.has_required_fields() {
                error.set(Some(ADMIN_FIELDS_REQUIRED.to_string()));
                return;
            }

            saving.set(true);
            error.set(None);
            let client = client.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let notice = notice.clone();
            let saving = saving.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::create(&client, &admin).await;
                if !mounted.is_mounted() {
                    return;
                }
                saving.set(false);
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        for input in &inputs {
                            input.set_value("");
                        }
                        notice.set(Some(format!("Created {}", admin.email)));
                        revision.set(*revision + 1);
                    }
                }
            });
        })
    };

    let on_toggle_status = {
        let client = auth.manager.client().clone();
        let mounted = mounted.clone();
        let error = error.clone();
        let notice = notice.clone();
        let revision = revision.clone();
        Callback::from(move |admin: Admin| {
            let client = client.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let notice = notice.clone();
            let revision = revision.clone();
            let changes = AdminUpdate {
                status: Some(admin.toggled_status().to_string()),
                ..AdminUpdate::default()
            };
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::update(&client, &admin.id, &changes).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        notice.set(Some(format!("{} is now {}", admin.email, admin.toggled_status())));
                        revision.set(*revision + 1);
                    }
                }
            });
        })
    };

    let on_delete = {
        let client = auth.manager.client().clone();
        let error = error.clone();
        let notice = notice.clone();
        let revision = revision.clone();
        Callback::from(move |admin: Admin| {
            let client = client.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let notice = notice.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = admin_service::delete(&client, &admin.id).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.error() {
                    Some(message) => error.set(Some(message)),
                    None => {
                        notice.set(Some(format!("Removed {}", admin.email)));
                        revision.set(*revision + 1);
                    }
                }
            });
        })
    };

    let rows = (*admins).clone().unwrap_or_default().into_iter().map(|admin| {
        let is_self = admin.id == current_id;
        let on_toggle = {
            let on_toggle_status = on_toggle_status.clone();
            let admin = admin.clone();
            Callback::from(move |_: MouseEvent| on_toggle_status.emit(admin.clone()))
        };
        let on_remove = {
            let on_delete = on_delete.clone();
            let admin = admin.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(admin.clone()))
        };
        html! {
            <tr key={admin.id.clone()}>
                <td>{admin.name.clone()}</td>
                <td>{admin.email.clone()}</td>
                <td>{admin.role.as_str()}</td>
                <td>{admin.status.clone().unwrap_or_default()}</td>
                <td>
                    <button class="btn-toggle" disabled={is_self} onclick={on_toggle}>
                        { if admin.is_active() { "Disable" } else { "Enable" } }
                    </button>
                    if !is_self {
                        <button class="btn-delete" onclick={on_remove}>{"Delete"}</button>
                    }
                </td>
            </tr>
        }
    });

    html! {
        <section class="admin-management-page">
            <form class="admin-form" onsubmit={on_create}>
                <input type="text" name="name" placeholder="Name" ref={name_ref} />
                <input type="email" name="email" placeholder="Email" ref={email_ref} />
                <input type="password" name="password" placeholder="Password" ref={password_ref} />
                <select name="role" ref={role_ref}>
                    <option value="admin" selected=true>{"admin"}</option>
                    <option value="super-admin">{"super-admin"}</option>
                </select>
                <button type="submit" disabled={*saving}>
                    { if *saving { "Creating..." } else { "Create Admin" } }
                </button>
            </form>

            if let Some(message) = (*error).clone() {
                <div class="panel-error" role="alert">{message}</div>
            }
            if let Some(message) = (*notice).clone() {
                <div class="panel-notice">{message}</div>
            }

            if (*admins).is_none() {
                <p>{"Loading admins..."}</p>
            } else if matches!(&*admins, Some(list) if list.is_empty()) {
                <p class="empty-state">{"No admins found."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Role"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>{for rows}</tbody>
                </table>
            }
        </section>
    }
}
