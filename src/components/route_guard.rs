use yew::prelude::*;

use crate::hooks::use_auth;
use crate::routing::{evaluate, Access, GuardDecision};

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub access: Access,
    pub children: Children,
}

/// Renders its children only when the session may see them. Redirects are
/// issued from an effect, never while rendering.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let decision = evaluate(&auth.status, props.access);

    {
        let manager = auth.manager.clone();
        use_effect_with(decision, move |decision| {
            if let GuardDecision::Redirect(target) = *decision {
                log::info!("🚧 Access denied, redirecting to {}", target);
                manager.navigate(target);
            }
        });
    }

    match decision {
        GuardDecision::Placeholder => html! {
            <div class="route-placeholder">
                <div class="spinner"></div>
            </div>
        },
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect(_) => html! {},
    }
}
