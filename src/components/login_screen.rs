use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_mounted};
use crate::routing::Route;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let mounted = use_mounted();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Already signed in: nothing to do here
    {
        let manager = auth.manager.clone();
        use_effect_with(auth.is_authenticated(), move |authenticated| {
            if *authenticated {
                manager.navigate(Route::Dashboard);
            }
        });
    }

    let on_submit = {
        let manager = auth.manager.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let email = value_of(&email_ref);
            let password = value_of(&password_ref);

            submitting.set(true);
            error.set(None);

            let manager = manager.clone();
            let mounted = mounted.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = manager.login(&email, &password).await;
                // A successful login has already moved us to the dashboard
                if !mounted.is_mounted() {
                    return;
                }
                submitting.set(false);
                error.set(result.error());
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🛡️"}</div>
                    </div>
                    <h1>{"Admin Console"}</h1>
                    <p>{"Sign in to manage the marketplace"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="admin@example.com"
                            ref={email_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            ref={password_ref}
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="login-error" role="alert">{message}</div>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        <span class="btn-text">
                            { if *submitting { "Signing in..." } else { "Sign In" } }
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
