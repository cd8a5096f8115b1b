//! Light/dark page theme toggle with a persisted preference.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On load it
//! restores the theme saved in `localStorage` onto the page root's
//! `data-theme` attribute; each click on `#theme-toggle` flips the theme,
//! saves it, and swaps the marker class on the control's icon. Stylesheets
//! keyed on `data-theme` do the actual rendering.
//!
//! All behavior is written against small element/storage traits so it builds
//! and tests natively. The web-sys adapters and JS exports sit behind the
//! `browser` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` enum and the pure toggle transition |
//! | [`controller`] | `ThemeController` and listener mounting |
//! | [`dom`] | Root/icon/toggle element traits and in-memory elements |
//! | [`storage`] | Key-value storage trait and in-memory storage |
//! | [`config`] | Storage key and element names, loadable from JSON |
//! | [`error`] | Crate error type |
//! | `browser` | web-sys adapters and `#[wasm_bindgen]` entry points |

#[cfg(feature = "browser")]
pub mod browser;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod storage;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::{ThemeController, mount};
pub use error::ThemeError;
pub use theme::Theme;
