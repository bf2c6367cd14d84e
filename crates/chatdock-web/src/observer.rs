//! Mount observation
//!
//! The widget mounts asynchronously, so enhancement runs once immediately
//! and otherwise waits on a structural mutation watcher that disconnects
//! itself after the first successful pass. No timer polling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MutationObserver, MutationObserverInit};

use crate::error::SetupError;
use crate::{console_error, dom, handles, locator, watermark};

/// Attach handles and watermark if the widget is mounted
///
/// Returns false while the widget is not in the document yet.
pub(crate) fn ensure_enhancements() -> bool {
    let win = match locator::find_chat_window() {
        Some(win) => win,
        None => return false,
    };

    if let Err(err) = handles::inject(&win) {
        console_error(&format!("[chatdock] failed to attach resize handles: {}", err));
    }
    watermark::apply();
    true
}

/// Run enhancement now, or as soon as the widget mounts
pub(crate) fn enhance_when_mounted() -> Result<(), SetupError> {
    if ensure_enhancements() {
        return Ok(());
    }

    let observer_cell: Rc<RefCell<Option<MutationObserver>>> = Rc::new(RefCell::new(None));

    let cell = observer_cell.clone();
    let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        if ensure_enhancements() {
            if let Some(observer) = cell.borrow_mut().take() {
                observer.disconnect();
            }
        }
    }));

    let observer = MutationObserver::new(closure.as_ref().unchecked_ref())?;
    let root = dom::document()?
        .document_element()
        .ok_or(SetupError::NoDocument)?;

    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    observer.observe_with_options(&root, &init)?;

    *observer_cell.borrow_mut() = Some(observer);
    closure.forget();
    Ok(())
}
