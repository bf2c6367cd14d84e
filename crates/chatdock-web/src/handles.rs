//! Resize handles and drag wiring
//!
//! Three focusable handle elements go onto the widget window. Pointer
//! moves and releases are observed on the document, not the handle, so a
//! fast drag that leaves the handle keeps resizing and a release anywhere
//! ends it. The listeners are installed once per injection and guarded by
//! the controller's idle state, so there is nothing to unregister between
//! drags.

use std::cell::RefCell;
use std::rc::Rc;

use chatdock_core::keyboard::key_resize;
use chatdock_core::limits::DEFAULT_SIZE;
use chatdock_core::{ArrowKey, HandleEdge, ResizeController, Size, Vec2};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::error::SetupError;
use crate::{dom, vars, viewport};

/// Marker attribute recording that handles were already injected
const HANDLE_MARKER: &str = "data-dim-handles";

/// Overlay that keeps pointer moves on the page during a drag, even over
/// the widget's own iframe internals
const OVERLAY_ID: &str = "dim-resize-capture";

const OVERLAY_ACTIVE_CLASS: &str = "is-active";

type SharedController = Rc<RefCell<ResizeController>>;

/// Previous body user-select value, held while a drag suppresses it
type SelectionGuard = Rc<RefCell<Option<String>>>;

/// Attach the three resize handles to the widget window
///
/// A second call on the same element is a no-op.
pub(crate) fn inject(win: &Element) -> Result<(), SetupError> {
    if win.get_attribute(HANDLE_MARKER).is_some() {
        return Ok(());
    }
    let win: HtmlElement = win
        .clone()
        .dyn_into()
        .map_err(|_| SetupError::Js("widget window is not an HTML element".to_string()))?;
    let document = dom::document()?;

    // Handles position against the window box
    let position = win.style().get_property_value("position").unwrap_or_default();
    if position.is_empty() {
        win.style().set_property("position", "fixed")?;
    }

    let overlay = ensure_overlay(&document)?;
    let controller: SharedController = Rc::new(RefCell::new(ResizeController::new()));
    let selection: SelectionGuard = Rc::new(RefCell::new(None));

    for edge in HandleEdge::ALL {
        let handle = create_handle(&document, edge)?;
        win.append_child(&handle)?;
        wire_pointer_start(&handle, edge, &win, &controller, &overlay, &selection)?;
        wire_keyboard(&handle, edge, &win)?;
    }

    install_drag_listeners(&document, &controller, &overlay, &selection)?;

    win.set_attribute(HANDLE_MARKER, "1")?;
    Ok(())
}

/// Size at drag start: stored variables, then the measured box, then the
/// built-in default
fn start_size(win: &HtmlElement) -> Size {
    let rect = win.get_bounding_client_rect();
    let fallback = Size::new(
        if rect.width() > 0.0 { rect.width() } else { DEFAULT_SIZE.width },
        if rect.height() > 0.0 { rect.height() } else { DEFAULT_SIZE.height },
    );
    vars::read_size_or(fallback)
}

fn create_div(document: &Document) -> Result<HtmlElement, SetupError> {
    document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| SetupError::Js("created element is not an HTML element".to_string()))
}

fn create_handle(document: &Document, edge: HandleEdge) -> Result<HtmlElement, SetupError> {
    let handle = create_div(document)?;
    handle.set_attribute("class", edge.class_attr())?;
    handle.set_tab_index(0);

    let style = handle.style();
    style.set_property("position", "absolute")?;
    style.set_property("cursor", edge.cursor())?;
    style.set_property("touch-action", "none")?;
    style.set_property("z-index", "10")?;
    for (property, value) in placement(edge) {
        style.set_property(property, value)?;
    }

    Ok(handle)
}

/// Inline geometry per handle: thin strips over the edges, a square over
/// the corner
fn placement(edge: HandleEdge) -> &'static [(&'static str, &'static str)] {
    match edge {
        HandleEdge::West => &[
            ("left", "-3px"),
            ("top", "0"),
            ("width", "8px"),
            ("height", "100%"),
        ],
        HandleEdge::North => &[
            ("top", "-3px"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "8px"),
        ],
        HandleEdge::NorthWest => &[
            ("top", "-5px"),
            ("left", "-5px"),
            ("width", "14px"),
            ("height", "14px"),
        ],
    }
}

fn ensure_overlay(document: &Document) -> Result<HtmlElement, SetupError> {
    if let Some(existing) = document.get_element_by_id(OVERLAY_ID) {
        return existing
            .dyn_into()
            .map_err(|_| SetupError::Js("capture overlay is not an HTML element".to_string()));
    }

    let overlay = create_div(document)?;
    overlay.set_id(OVERLAY_ID);

    let style = overlay.style();
    style.set_property("position", "fixed")?;
    style.set_property("inset", "0")?;
    style.set_property("display", "none")?;
    style.set_property("background", "transparent")?;
    style.set_property("z-index", "2147483646")?;

    if let Some(body) = document.body() {
        body.append_child(&overlay)?;
    }
    Ok(overlay)
}

fn activate_overlay(overlay: &HtmlElement) {
    let _ = overlay.class_list().add_1(OVERLAY_ACTIVE_CLASS);
    let _ = overlay.style().set_property("display", "block");
}

fn deactivate_overlay(overlay: &HtmlElement) {
    let _ = overlay.class_list().remove_1(OVERLAY_ACTIVE_CLASS);
    let _ = overlay.style().set_property("display", "none");
}

fn suppress_selection(selection: &SelectionGuard) {
    let body = match dom::document().ok().and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    let style = body.style();
    let previous = style.get_property_value("user-select").unwrap_or_default();
    let _ = style.set_property("user-select", "none");
    *selection.borrow_mut() = Some(previous);
}

fn restore_selection(selection: &SelectionGuard) {
    let previous = match selection.borrow_mut().take() {
        Some(previous) => previous,
        None => return,
    };
    let body = match dom::document().ok().and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    if previous.is_empty() {
        let _ = body.style().remove_property("user-select");
    } else {
        let _ = body.style().set_property("user-select", &previous);
    }
}

fn wire_pointer_start(
    handle: &HtmlElement,
    edge: HandleEdge,
    win: &HtmlElement,
    controller: &SharedController,
    overlay: &HtmlElement,
    selection: &SelectionGuard,
) -> Result<(), SetupError> {
    let controller = controller.clone();
    let overlay = overlay.clone();
    let selection = selection.clone();
    let win = win.clone();

    let closure = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();
        let pointer = Vec2::new(event.client_x() as f64, event.client_y() as f64);
        controller.borrow_mut().begin(edge, pointer, start_size(&win));
        activate_overlay(&overlay);
        suppress_selection(&selection);
    }));
    handle.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_drag_listeners(
    document: &Document,
    controller: &SharedController,
    overlay: &HtmlElement,
    selection: &SelectionGuard,
) -> Result<(), SetupError> {
    {
        let controller = controller.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
            let pointer = Vec2::new(event.client_x() as f64, event.client_y() as f64);
            let resized = controller.borrow_mut().update(pointer, &viewport::current_limits());
            if let Some(size) = resized {
                let _ = vars::write_size(size);
            }
        }));
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let controller = controller.clone();
        let overlay = overlay.clone();
        let selection = selection.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
            finish_drag(&controller, &overlay, &selection);
        }));
        document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Safety net: losing the window mid-drag must not leave a stuck session
    {
        let controller = controller.clone();
        let overlay = overlay.clone();
        let selection = selection.clone();
        let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            finish_drag(&controller, &overlay, &selection);
        }));
        dom::window()?.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Single teardown path shared by mouseup and focus loss
fn finish_drag(controller: &SharedController, overlay: &HtmlElement, selection: &SelectionGuard) {
    if controller.borrow_mut().end() {
        deactivate_overlay(overlay);
        restore_selection(selection);
    }
}

fn wire_keyboard(
    handle: &HtmlElement,
    edge: HandleEdge,
    win: &HtmlElement,
) -> Result<(), SetupError> {
    let win = win.clone();

    let closure = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |event: KeyboardEvent| {
        let key = match ArrowKey::from_key(&event.key()) {
            Some(key) => key,
            None => return,
        };
        let limits = viewport::current_limits();
        let size = key_resize(edge, key, event.shift_key(), start_size(&win), &limits);
        let _ = vars::write_size(size);
        event.prevent_default();
    }));
    handle.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
