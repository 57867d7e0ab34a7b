//! Bridge to the `window.Clerk` global installed by the bootstrap script.
//!
//! Browser-only; compiled under the `hydrate` feature.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Window event dispatched by `/assets/clerk-bootstrap.js` once `Clerk.load()`
/// resolves.
pub const CLERK_LOADED_EVENT: &str = "clerk:loaded";

fn clerk() -> Option<JsValue> {
    let window = web_sys::window()?;
    let clerk = js_sys::Reflect::get(&window, &JsValue::from_str("Clerk")).ok()?;
    if clerk.is_undefined() || clerk.is_null() { None } else { Some(clerk) }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Whether ClerkJS has finished loading.
pub fn is_loaded() -> bool {
    clerk()
        .and_then(|c| js_sys::Reflect::get(&c, &JsValue::from_str("loaded")).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Run `callback` once ClerkJS is ready: immediately if it already is,
/// otherwise on the next `clerk:loaded` event.
pub fn on_loaded(callback: impl Fn() + 'static) {
    if is_loaded() {
        callback();
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn()>::new(callback);
    if let Err(e) = window.add_event_listener_with_callback(CLERK_LOADED_EVENT, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {CLERK_LOADED_EVENT}: {}", js_error(e));
    }
    closure.forget();
}

fn method(clerk: &JsValue, name: &str) -> Result<js_sys::Function, String> {
    js_sys::Reflect::get(clerk, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| format!("Clerk.{name} is not a function"))
}

/// Session id carried by `Clerk` itself or by a listener payload; both
/// expose the active session as `.session`.
fn session_id_of(resources: &JsValue) -> Option<String> {
    let session = js_sys::Reflect::get(resources, &JsValue::from_str("session")).ok()?;
    if session.is_undefined() || session.is_null() {
        return None;
    }
    js_sys::Reflect::get(&session, &JsValue::from_str("id")).ok()?.as_string()
}

/// Id of the active Clerk session, if any.
pub fn session_id() -> Option<String> {
    clerk().and_then(|c| session_id_of(&c))
}

/// Run `callback` with the active session id every time ClerkJS notifies
/// its listeners (`Clerk.addListener`): sign-in, sign-out, session expiry,
/// session switch, or a change made in another tab.
pub fn on_session_change(callback: impl Fn(Option<String>) + 'static) {
    let Some(clerk) = clerk() else {
        log::warn!("Clerk global missing; session changes will not be observed");
        return;
    };
    let add_listener = match method(&clerk, "addListener") {
        Ok(func) => func,
        Err(e) => {
            log::warn!("cannot observe clerk sessions: {e}");
            return;
        }
    };
    let closure = Closure::<dyn Fn(JsValue)>::new(move |resources: JsValue| callback(session_id_of(&resources)));
    if let Err(e) = add_listener.call1(&clerk, closure.as_ref().unchecked_ref()) {
        log::warn!("Clerk.addListener failed: {}", js_error(e));
    }
    closure.forget();
}

/// Call `Clerk.signOut()` and wait for it. A missing Clerk global is not an
/// error; there is no browser session to end.
///
/// # Errors
///
/// Returns an error string if `signOut` is missing or its promise rejects.
pub async fn sign_out() -> Result<(), String> {
    let Some(clerk) = clerk() else {
        return Ok(());
    };
    let func = method(&clerk, "signOut")?;
    let promise = func.call0(&clerk).map_err(js_error)?;
    wasm_bindgen_futures::JsFuture::from(promise.unchecked_into::<js_sys::Promise>())
        .await
        .map_err(js_error)?;
    Ok(())
}
