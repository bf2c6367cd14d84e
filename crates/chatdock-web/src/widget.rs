//! Widget bootstrap and cross-origin diagnostics

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PromiseRejectionEvent;

use crate::error::SetupError;
use crate::{config, console_error, dom, log, warn};

/// Global the widget bundle installs its factory under
const FACTORY_GLOBAL: &str = "createChat";

const INIT_CORS_HINT: &str = "[chatdock] If you see a CORS error, add your origin \
    (e.g. http://127.0.0.1:5501 and http://localhost:5501) to the chat trigger's \
    allowed origins, or configure CORS on your reverse proxy.";

const FETCH_CORS_HINT: &str = "[chatdock] The chat webhook request failed. If this \
    is a CORS error, allow your dev origin(s) on the chat trigger: \
    http://127.0.0.1:5501 and http://localhost:5501";

/// Initialize the chat widget
///
/// Failure is non-fatal: the widget simply does not appear and the page
/// keeps working, so errors are logged instead of propagated.
pub(crate) fn bootstrap() {
    match init_widget() {
        Ok(()) => log("[chatdock] chat widget initialized"),
        Err(err) => {
            console_error(&format!("[chatdock] failed to initialize chat widget: {}", err));
            warn(INIT_CORS_HINT);
        }
    }
}

fn init_widget() -> Result<(), SetupError> {
    let window = dom::window()?;

    let factory = js_sys::Reflect::get(&window, &FACTORY_GLOBAL.into())
        .map_err(|_| SetupError::FactoryMissing)?;
    let factory: js_sys::Function = factory.dyn_into().map_err(|_| SetupError::FactoryMissing)?;

    // Options cross the boundary as a plain JS object
    let json = serde_json::to_string(&config::widget_options())
        .map_err(|err| SetupError::Config(err.to_string()))?;
    let options = js_sys::JSON::parse(&json)?;

    factory.call1(&JsValue::NULL, &options)?;
    Ok(())
}

/// Warn about cross-origin setup when the webhook fetch rejects
pub(crate) fn install_rejection_hint() -> Result<(), SetupError> {
    let window = dom::window()?;

    let closure = Closure::<dyn FnMut(PromiseRejectionEvent)>::wrap(Box::new(
        |event: PromiseRejectionEvent| {
            let reason = event.reason();
            // Rejections from a failed fetch carry a TypeError
            let message = match reason.dyn_ref::<js_sys::Error>() {
                Some(error) => String::from(error.to_string()),
                None => reason.as_string().unwrap_or_default(),
            };
            if message.contains("Failed to fetch") {
                warn(FETCH_CORS_HINT);
            }
        },
    ));
    window
        .add_event_listener_with_callback("unhandledrejection", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
