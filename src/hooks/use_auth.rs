// ============================================================================
// AUTH CONTEXT - Shares the session manager with the component tree
// ============================================================================
// `AuthProvider` re-renders its subtree on every status change, so anything
// below it that calls `use_auth()` sees the current `AuthStatus`.
// ============================================================================

use yew::prelude::*;

use crate::models::Admin;
use crate::state::AuthStatus;
use crate::viewmodels::SessionManager;

#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub manager: SessionManager,
    pub status: AuthStatus,
}

impl AuthContext {
    pub fn admin(&self) -> Option<&Admin> {
        self.status.admin()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub manager: SessionManager,
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let status = use_state(|| props.manager.status());

    {
        let status = status.clone();
        use_effect_with(props.manager.clone(), move |manager| {
            // Catch up with anything that changed between render and effect
            status.set(manager.status());

            let id = manager.subscribe(move |next| status.set(next.clone()));
            let manager = manager.clone();
            move || {
                manager.unsubscribe(id);
            }
        });
    }

    let context = AuthContext {
        manager: props.manager.clone(),
        status: (*status).clone(),
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Panics when called outside `AuthProvider`
#[hook]
pub fn use_auth() -> AuthContext {
    match use_context::<AuthContext>() {
        Some(context) => context,
        None => panic!("use_auth must be used within AuthProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{harness, harness_with_session, render_to_string, sample_admin};
    use rstest::rstest;

    #[function_component(WhoAmI)]
    fn who_am_i() -> Html {
        let auth = use_auth();
        let label = match auth.admin() {
            Some(admin) => admin.email.clone(),
            None if auth.is_loading() => "loading".to_string(),
            None => "anonymous".to_string(),
        };
        html! { <span class="who">{label}</span> }
    }

    #[derive(Properties, PartialEq)]
    struct ProvidedProps {
        manager: SessionManager,
    }

    #[function_component(Provided)]
    fn provided(props: &ProvidedProps) -> Html {
        html! {
            <AuthProvider manager={props.manager.clone()}>
                <WhoAmI />
            </AuthProvider>
        }
    }

    #[rstest]
    #[should_panic(expected = "use_auth must be used within AuthProvider")]
    fn use_auth_outside_provider_panics() {
        render_to_string::<WhoAmI>(());
    }

    #[rstest]
    fn provider_exposes_current_status() {
        let loading = harness();
        let restored = harness_with_session(&sample_admin());
        restored.manager.hydrate();

        let before = render_to_string::<Provided>(ProvidedProps { manager: loading.manager.clone() });
        let after = render_to_string::<Provided>(ProvidedProps { manager: restored.manager.clone() });

        assert!(before.contains("loading"));
        assert!(after.contains("a@x.com"));
    }
}
