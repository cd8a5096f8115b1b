//! Browser bindings: web-sys adapters and the exported JS entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page script calls `init_theme_toggle()` (or the `_with_config` form)
//! once after the DOM is parsed. Everything here only locates elements and
//! adapts them to the `dom`/`storage` seams; behavior lives in `controller`.
//!
//! TRADE-OFFS
//! ==========
//! The click closure is leaked with `Closure::forget`. It has to live as long
//! as the page, and a second mount is refused so at most one closure leaks.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::{RootTarget, ThemeConfig};
use crate::controller::{self, ThemeController};
use crate::dom::{IconElement, RootElement, ToggleControl};
use crate::error::ThemeError;
use crate::storage::ThemeStorage;

type BrowserController = ThemeController<DomElement, DomElement, LocalStorage>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn to_js(err: ThemeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Acquire local storage. Failure is remembered, not raised, so every
    /// later access reports [`ThemeError::StorageUnavailable`].
    #[must_use]
    pub fn acquire(window: &web_sys::Window) -> Self {
        let inner = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("local storage refused: {}", js_message(&e));
                None
            }
        };
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, ThemeError> {
        self.inner.as_ref().ok_or(ThemeError::StorageUnavailable)
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(&e)))
    }
}

/// A live DOM element.
pub struct DomElement(web_sys::Element);

impl RootElement for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.0
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }
}

impl IconElement for DomElement {
    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|e| ThemeError::Dom(js_message(&e)))
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl ToggleControl for DomElement {
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        let cb = Closure::wrap(handler);
        self.0
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_message(&e)))?;
        cb.forget();
        Ok(())
    }
}

fn install_logging(config: &ThemeConfig) -> Result<(), ThemeError> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config.level()?).is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}

fn start(config: ThemeConfig) -> Result<(), ThemeError> {
    install_logging(&config)?;

    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("theme toggle already initialized; ignoring repeat call");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Dom("no document".into()))?;
    let root: web_sys::Element = match config.root {
        RootTarget::Body => document
            .body()
            .ok_or_else(|| ThemeError::Dom("document has no body".into()))?
            .into(),
        RootTarget::Document => document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?,
    };

    let toggle = document.get_element_by_id(&config.toggle_id).map(DomElement);
    let icon = match &toggle {
        Some(el) => el
            .0
            .query_selector(&config.icon_selector)
            .map_err(|e| ThemeError::Dom(js_message(&e)))?
            .map(DomElement),
        None => None,
    };

    let storage = LocalStorage::acquire(&window);
    let controller = Rc::new(ThemeController::new(DomElement(root), icon, storage, config));
    controller::mount(Rc::clone(&controller), toggle.as_ref())?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(controller));
    Ok(())
}

/// Restore the saved theme and bind `#theme-toggle` using default names.
///
/// # Errors
///
/// Rejects with a message when the page has no root element to theme.
#[wasm_bindgen]
pub fn init_theme_toggle() -> Result<(), JsValue> {
    start(ThemeConfig::default()).map_err(to_js)
}

/// Same as [`init_theme_toggle`] with a JSON [`ThemeConfig`].
///
/// # Errors
///
/// Rejects with a message for invalid configuration or a missing root element.
#[wasm_bindgen]
pub fn init_theme_toggle_with_config(config: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config).map_err(to_js)?;
    start(config).map_err(to_js)
}

/// Theme on the root element, `undefined` before init or when unrecognized.
#[wasm_bindgen]
#[must_use]
pub fn current_theme() -> Option<String> {
    MOUNTED.with(|m| {
        m.borrow()
            .as_ref()
            .and_then(|controller| controller.current())
            .map(|theme| theme.as_str().to_owned())
    })
}
