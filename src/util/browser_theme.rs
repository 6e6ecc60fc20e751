//! Browser adapter and page wiring for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserThemeHost`] maps the [`ThemeHost`] capabilities onto the real
//! document: the `dark` class and `data-color-theme` attribute on `<html>`,
//! an `aria-pressed` sweep over every `[data-theme-toggle]` control, the
//! `"theme"` localStorage slot, and the `prefers-color-scheme` media query.
//! [`install`] runs the once-per-session init protocol. Requires a browser
//! environment; SSR builds compile every entry point to a callable no-op so
//! server rendering stays deterministic.
//!
//! TRADE-OFFS
//! ==========
//! The host is stateless (the document and storage are the state), so each
//! event closure constructs a fresh controller around it instead of sharing
//! one behind `Rc<RefCell<..>>`.

#[cfg(test)]
#[path = "browser_theme_test.rs"]
mod browser_theme_test;

use crate::util::storage;
use crate::util::theme::Theme;
use crate::util::theme_controller::{ThemeController, ThemeHost};

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::toggle_click::{ToggleHit, decide_toggle_click};

/// localStorage slot for the explicit user preference.
pub const STORAGE_KEY: &str = "theme";
/// Marker attribute identifying theme toggle controls.
pub const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
/// Event dispatched on `window` after every explicit toggle.
pub const THEME_CHANGE_EVENT: &str = "themechange";
/// Decoupled toggle-request event for widgets that cannot rely on click
/// bubbling reaching the document-level handler.
pub const TOGGLE_REQUEST_EVENT: &str = "theme-toggle-click";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";
#[cfg(feature = "hydrate")]
const THEME_ATTR: &str = "data-color-theme";
#[cfg(feature = "hydrate")]
const SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The live-document [`ThemeHost`]. Stateless; safe to construct per use.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn stored_preference(&self) -> Option<Theme> {
        storage::read_string(STORAGE_KEY).as_deref().and_then(Theme::parse)
    }

    fn store_preference(&mut self, theme: Theme) {
        storage::write_string(STORAGE_KEY, theme.as_str());
    }

    fn system_prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(SCHEME_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn root_is_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .map_or(false, |el| el.class_list().contains(DARK_CLASS))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set_root_theme(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if theme.is_dark() {
                let _ = root.class_list().add_1(DARK_CLASS);
            } else {
                let _ = root.class_list().remove_1(DARK_CLASS);
            }
            let _ = root.set_attribute(THEME_ATTR, theme.as_str());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn set_toggles_pressed(&mut self, pressed: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Ok(toggles) = document.query_selector_all(TOGGLE_SELECTOR) else {
                return;
            };
            let value = if pressed { "true" } else { "false" };
            for index in 0..toggles.length() {
                if let Some(el) = toggles.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                    let _ = el.set_attribute("aria-pressed", value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pressed;
        }
    }

    fn announce_theme_change(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let detail = js_sys::Object::new();
            let _ = js_sys::Reflect::set(
                &detail,
                &wasm_bindgen::JsValue::from_str("theme"),
                &wasm_bindgen::JsValue::from_str(theme.as_str()),
            );
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            if let Ok(event) =
                web_sys::CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init)
            {
                let _ = window.dispatch_event(&event);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// What is visually showing right now. Light on the server or before any
/// document exists.
#[must_use]
pub fn active_theme() -> Theme {
    ThemeController::new(BrowserThemeHost).active_theme()
}

/// Reapply the current theme before the router swaps page content. Never
/// persists.
pub fn reapply_before_swap() {
    ThemeController::new(BrowserThemeHost).before_swap();
}

/// Reapply after a swap and refresh pressed-state on whatever toggle
/// controls the new page carries.
pub fn reapply_after_swap() {
    ThemeController::new(BrowserThemeHost).after_swap();
}

/// Run the init protocol: apply the resolved theme (persisting a first-visit
/// fallback), then attach the capturing click handler, the synthetic
/// toggle-request listener, and the system scheme subscription.
///
/// `on_change` mirrors every theme movement into reactive state (toggle
/// icon, aria labels). It fires in addition to the `themechange` DOM event,
/// which remains toggle-only.
///
/// Call once per page session, after hydration; the first apply completes
/// synchronously before any listener can fire.
pub fn install(on_change: impl Fn(Theme) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let controller = ThemeController::mount(BrowserThemeHost);
        let on_change: Rc<dyn Fn(Theme)> = Rc::new(on_change);
        on_change(controller.active_theme());

        let Some(window) = web_sys::window() else {
            return;
        };

        // Capturing click handler: sees toggle clicks before any in-page
        // framework handler can swallow them.
        let click_change = Rc::clone(&on_change);
        let click_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let decision = decide_toggle_click(
                toggle_hit(event.target()),
                toggle_hit(event.current_target()),
            );
            if !decision.toggle {
                return;
            }
            if decision.prevent_default {
                event.prevent_default();
            }
            if decision.stop_propagation {
                event.stop_propagation();
            }
            let theme = ThemeController::new(BrowserThemeHost).toggle_theme();
            click_change(theme);
        });
        let _ = window.add_event_listener_with_callback_and_bool(
            "click",
            click_cb.as_ref().unchecked_ref(),
            true,
        );
        click_cb.forget();

        // Decoupled toggle requests from widgets outside the click path.
        let request_change = Rc::clone(&on_change);
        let request_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let theme = ThemeController::new(BrowserThemeHost).toggle_theme();
            request_change(theme);
        });
        let _ = window.add_event_listener_with_callback(
            TOGGLE_REQUEST_EVENT,
            request_cb.as_ref().unchecked_ref(),
        );
        request_cb.forget();

        // System scheme changes only matter until the user picks a side.
        if let Ok(Some(query)) = window.match_media(SCHEME_QUERY) {
            let scheme_change = Rc::clone(&on_change);
            let scheme_cb =
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                    let mut controller = ThemeController::new(BrowserThemeHost);
                    controller.on_system_scheme_change();
                    scheme_change(controller.active_theme());
                });
            let _ = query
                .add_event_listener_with_callback("change", scheme_cb.as_ref().unchecked_ref());
            scheme_cb.forget();
        }

        log::debug!("theme controller installed");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// Nearest-toggle classification for one end of a dispatched click.
#[cfg(feature = "hydrate")]
fn toggle_hit(target: Option<web_sys::EventTarget>) -> Option<ToggleHit> {
    let element = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok())?;
    let toggle = element.closest(TOGGLE_SELECTOR).ok().flatten()?;
    Some(ToggleHit {
        is_button: toggle.tag_name().eq_ignore_ascii_case("button"),
    })
}
