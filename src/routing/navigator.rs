use wasm_bindgen::JsValue;
use web_sys::{window, Event};

use super::route::Route;

/// Navigation primitive the session core depends on
pub trait Navigator {
    fn navigate(&self, route: Route);
    fn current_path(&self) -> String;
}

/// History API navigation. A synthetic `popstate` tells the app to re-read
/// the location.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        let Some(win) = window() else {
            return;
        };
        if self.current_path() == route.path() {
            return;
        }

        log::debug!("🧭 Navigating to {}", route);
        let pushed = win
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));

        match pushed {
            Ok(()) => {
                if let Ok(event) = Event::new("popstate") {
                    let _ = win.dispatch_event(&event);
                }
            }
            Err(e) => {
                log::warn!("⚠️ History API unavailable ({:?}), doing a full load", e);
                let _ = win.location().set_href(route.path());
            }
        }
    }

    fn current_path(&self) -> String {
        window()
            .and_then(|win| win.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}
