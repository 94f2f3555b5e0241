use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use super::{DashboardLayout, LoginScreen, RouteGuard};
use crate::hooks::AuthProvider;
use crate::routing::{BrowserNavigator, Navigator, Route};
use crate::viewmodels::SessionManager;

fn current_route() -> Route {
    Route::from_path(&BrowserNavigator.current_path())
}

#[function_component(App)]
pub fn app() -> Html {
    let manager = use_memo((), |_| {
        let manager = SessionManager::browser();
        manager.hydrate();
        manager
    });
    let route = use_state(current_route);

    // Navigation (ours or the back button) surfaces as `popstate`
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    route.set(current_route());
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Err(e) =
                    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                {
                    log::error!("❌ Could not listen for navigation: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <AuthProvider manager={(*manager).clone()}>
            <RouteView route={*route} />
        </AuthProvider>
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    match props.route {
        Route::Login => html! { <LoginScreen /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
                <a href={Route::Dashboard.path()}>{"Back to dashboard"}</a>
            </div>
        },
        route => html! {
            <RouteGuard access={route.access()}>
                <DashboardLayout {route} />
            </RouteGuard>
        },
    }
}
