//! WASM module: browser wiring for the connector.
//!
//! Implements the boundary traits over `window.cardano` with:
//! - extern bindings to the injected wallet objects (ffi)
//! - JsValue ↔ serde conversions and error classification (browser)
//! - JS bindings via wasm-bindgen
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Connector / Wallet / Connection  │
//! │        (host-independent, crate::cip30) │
//! └─────────────────┬───────────────────────┘
//!                   │ boundary traits
//! ┌─────────────────▼───────────────────────┐
//! │  BrowserRegistry / BrowserWallet /      │
//! │  BrowserApi (JsValue conversions)       │
//! └─────────────────┬───────────────────────┘
//!                   │ extern "C"
//! ┌─────────────────▼───────────────────────┐
//! │  window.cardano.<name> (the extension)  │
//! └─────────────────────────────────────────┘
//! ```

mod browser;
mod ffi;

pub use browser::{browser_connector, BrowserApi, BrowserRegistry, BrowserWallet};

use wasm_bindgen::prelude::*;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

pub(crate) use log;
