// ============================================================================
// DASHBOARD LAYOUT - Sidebar shell around every protected page
// ============================================================================

use yew::prelude::*;

use super::{AdminManagementPage, BookingsPage, CustomersPage, PlansPage, VendorsPage};
use crate::hooks::{use_auth, use_mounted};
use crate::models::DashboardStats;
use crate::routing::{nav_sections, Route};
use crate::services::dashboard_service;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub route: Route,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let auth = use_auth();
    let Some(admin) = auth.admin().cloned() else {
        return html! {};
    };

    let on_logout = {
        let manager = auth.manager.clone();
        Callback::from(move |_: MouseEvent| manager.logout())
    };

    let sections = nav_sections(&admin).into_iter().map(|section| {
        let items = section.items.into_iter().map(|item| {
            let onclick = {
                let manager = auth.manager.clone();
                let target = item.route;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    manager.navigate(target);
                })
            };
            let active = item.route == props.route;
            html! {
                <a
                    href={item.route.path()}
                    class={classes!("nav-item", active.then_some("active"))}
                    {onclick}
                >
                    {item.title}
                </a>
            }
        });

        html! {
            <div class="nav-section">
                <p class="nav-section-label">{section.label}</p>
                {for items}
            </div>
        }
    });

    html! {
        <div class="dashboard-layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <p class="admin-name">{admin.display_name()}</p>
                    <p class="admin-role">{admin.role.as_str()}</p>
                </div>
                <nav class="sidebar-nav">
                    {for sections}
                </nav>
                <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
            </aside>

            <main class="content">
                <h1 class="page-title">{props.route.title()}</h1>
                {page_for(props.route)}
            </main>
        </div>
    }
}

/// Subscriptions are managed through their plans, so both routes share a page
fn page_for(route: Route) -> Html {
    match route {
        Route::Customers => html! { <CustomersPage /> },
        Route::Vendors => html! { <VendorsPage /> },
        Route::Bookings => html! { <BookingsPage /> },
        Route::Subscriptions | Route::Plans => html! { <PlansPage /> },
        Route::AdminManagement => html! { <AdminManagementPage /> },
        Route::Dashboard | Route::Login | Route::NotFound => html! { <DashboardOverview /> },
    }
}

#[function_component(DashboardOverview)]
fn dashboard_overview() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let stats = use_state(|| None::<DashboardStats>);
    let error = use_state(|| None::<String>);

    {
        let client = auth.manager.client().clone();
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = dashboard_service::get_stats(&client).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result.into_result() {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    if let Some(message) = (*error).clone() {
        return html! { <div class="panel-error" role="alert">{message}</div> };
    }

    let Some(stats) = (*stats).clone() else {
        return html! { <div class="spinner"></div> };
    };

    let cards = [
        ("Customers", stats.total_customers.to_string()),
        ("Vendors", stats.total_vendors.to_string()),
        ("Bookings", stats.total_bookings.to_string()),
        ("Active Subscriptions", stats.active_subscriptions.to_string()),
        ("Revenue", format!("{:.2}", stats.revenue)),
    ];

    html! {
        <div class="stats-grid">
            { for cards.into_iter().map(|(label, value)| html! {
                <div class="stat-card">
                    <p class="stat-label">{label}</p>
                    <p class="stat-value">{value}</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::AuthProvider;
    use crate::test_support::{harness_with_session, render_to_string, sample_super_admin};
    use crate::viewmodels::SessionManager;
    use rstest::rstest;

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        manager: SessionManager,
        route: Route,
    }

    #[function_component(Shell)]
    fn shell(props: &ShellProps) -> Html {
        html! {
            <AuthProvider manager={props.manager.clone()}>
                <DashboardLayout route={props.route} />
            </AuthProvider>
        }
    }

    #[rstest]
    #[case(Route::Vendors, "vendors-page")]
    #[case(Route::Plans, "plan-form")]
    #[case(Route::Subscriptions, "plan-form")]
    #[case(Route::AdminManagement, "admin-form")]
    #[case(Route::Dashboard, "spinner")]
    fn each_route_mounts_its_page(#[case] route: Route, #[case] marker: &str) {
        let h = harness_with_session(&sample_super_admin());
        h.manager.hydrate();

        let html = render_to_string::<Shell>(ShellProps {
            manager: h.manager.clone(),
            route,
        });

        assert!(html.contains(marker), "{route:?} rendered {html}");
        assert!(html.contains("Root"));
        assert!(h.transport.requests().is_empty());
    }
}
