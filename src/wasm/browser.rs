//! Browser implementations of the boundary traits.
//!
//! Translation rules, applied uniformly:
//! - optional parameters go out as `undefined` when absent, else through
//!   serde-wasm-bindgen
//! - `null`/`undefined` results from getUtxos/getCollateral map to `None`
//! - promise rejections are classified per CIP-30 error family, message
//!   kept verbatim

use async_trait::async_trait;
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::ffi::{Cip30ApiJs, Cip30WalletJs};
use super::log;
use crate::cip30::{
    Cbor, Connector, DataSignature, Extension, HexBytes, NetworkId, Paginate, WalletApi,
    WalletDescriptor, WalletRegistry,
};
use crate::error::{ConnectorError, ErrorContext};

/// Connector over the live `window.cardano` registry.
pub fn browser_connector() -> Connector<BrowserRegistry> {
    Connector::new(BrowserRegistry)
}

// -----------------------------------------------------------------------------
// JsValue helpers
// -----------------------------------------------------------------------------

fn js_err(ctx: ErrorContext, err: JsValue) -> ConnectorError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|f| f as i32);
    let info = Reflect::get(&err, &JsValue::from_str("info"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ConnectorError::classify(ctx, code, info)
}

fn from_js<T: for<'de> serde::Deserialize<'de>>(
    ctx: ErrorContext,
    value: JsValue,
) -> Result<T, ConnectorError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ConnectorError::classify(ctx, None, e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

/// Absence marker the wallet side expects for an omitted parameter.
fn opt_to_js<T: Serialize>(value: Option<T>) -> JsValue {
    match value {
        Some(v) => to_js(&v),
        None => JsValue::UNDEFINED,
    }
}

/// Map the tri-state getUtxos/getCollateral result: `null`/`undefined`
/// stays `None`, an array becomes `Some(list)`, even when empty.
fn opt_list(ctx: ErrorContext, value: JsValue) -> Result<Option<Vec<Cbor>>, ConnectorError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    from_js(ctx, value).map(Some)
}

// -----------------------------------------------------------------------------
// Registry
// -----------------------------------------------------------------------------

/// The `window.cardano` registry, read fresh on every call so wallets
/// injected after page load are seen.
pub struct BrowserRegistry;

fn registry_object() -> Option<Object> {
    let window = web_sys::window()?;
    let cardano = Reflect::get(window.as_ref(), &JsValue::from_str("cardano")).ok()?;
    cardano.dyn_into::<Object>().ok()
}

fn registry_entry(name: &str) -> Option<JsValue> {
    let registry = registry_object()?;
    let entry = Reflect::get(&registry, &JsValue::from_str(name)).ok()?;
    if entry.is_undefined() || entry.is_null() {
        None
    } else {
        Some(entry)
    }
}

impl WalletRegistry for BrowserRegistry {
    type Descriptor = BrowserWallet;

    fn names(&self) -> Vec<String> {
        let Some(registry) = registry_object() else {
            // No window.cardano at all: nothing installed, not an error.
            return Vec::new();
        };
        Object::keys(&registry)
            .iter()
            .filter_map(|k| k.as_string())
            .collect()
    }

    fn is_available(&self, name: &str) -> bool {
        // A usable entry is an object whose `enable` is a function. Other
        // properties under window.cardano (some wallets park helper objects
        // there) are not wallets.
        let Some(entry) = registry_entry(name) else {
            return false;
        };
        if !entry.is_object() {
            return false;
        }
        Reflect::get(&entry, &JsValue::from_str("enable"))
            .map(|f| f.is_function())
            .unwrap_or(false)
    }

    fn lookup(&self, name: &str) -> Option<BrowserWallet> {
        let entry = registry_entry(name)?;
        Some(BrowserWallet {
            inner: entry.unchecked_into(),
        })
    }
}

// -----------------------------------------------------------------------------
// Descriptor
// -----------------------------------------------------------------------------

/// One injected wallet descriptor.
pub struct BrowserWallet {
    inner: Cip30WalletJs,
}

#[derive(Serialize)]
struct EnableArgs<'a> {
    extensions: &'a [Extension],
}

#[async_trait(?Send)]
impl WalletDescriptor for BrowserWallet {
    type Api = BrowserApi;

    fn api_version(&self) -> String {
        self.inner.api_version()
    }

    fn name(&self) -> String {
        self.inner.name()
    }

    fn icon(&self) -> String {
        self.inner.icon()
    }

    fn supported_extensions(&self) -> Vec<Extension> {
        serde_wasm_bindgen::from_value(self.inner.supported_extensions()).unwrap_or_default()
    }

    async fn enable(&self, extensions: &[Extension]) -> Result<BrowserApi, ConnectorError> {
        let args = if extensions.is_empty() {
            JsValue::UNDEFINED
        } else {
            to_js(&EnableArgs { extensions })
        };
        let api = self
            .inner
            .enable(&args)
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        log!("[cip30] enabled wallet: {}", self.inner.name());
        Ok(BrowserApi {
            inner: api.unchecked_into(),
        })
    }

    async fn is_enabled(&self) -> Result<bool, ConnectorError> {
        let v = self
            .inner
            .is_enabled()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        Ok(v.as_bool().unwrap_or(false))
    }
}

// -----------------------------------------------------------------------------
// Connection object
// -----------------------------------------------------------------------------

/// The connection object an enable resolved to.
pub struct BrowserApi {
    inner: Cip30ApiJs,
}

#[async_trait(?Send)]
impl WalletApi for BrowserApi {
    async fn get_extensions(&self) -> Result<Vec<Extension>, ConnectorError> {
        let v = self
            .inner
            .get_extensions()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_network_id(&self) -> Result<NetworkId, ConnectorError> {
        let v = self
            .inner
            .get_network_id()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_balance(&self) -> Result<Cbor, ConnectorError> {
        let v = self
            .inner
            .get_balance()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_change_address(&self) -> Result<Cbor, ConnectorError> {
        let v = self
            .inner
            .get_change_address()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_reward_addresses(&self) -> Result<Vec<Cbor>, ConnectorError> {
        let v = self
            .inner
            .get_reward_addresses()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_unused_addresses(&self) -> Result<Vec<Cbor>, ConnectorError> {
        let v = self
            .inner
            .get_unused_addresses()
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_used_addresses(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Vec<Cbor>, ConnectorError> {
        let v = self
            .inner
            .get_used_addresses(&opt_to_js(paginate))
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        from_js(ErrorContext::Api, v)
    }

    async fn get_utxos(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Option<Vec<Cbor>>, ConnectorError> {
        let v = self
            .inner
            .get_utxos(&opt_to_js(paginate))
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        opt_list(ErrorContext::Api, v)
    }

    async fn get_collateral(&self, amount: &Cbor) -> Result<Option<Vec<Cbor>>, ConnectorError> {
        let v = self
            .inner
            .get_collateral(&to_js(amount))
            .await
            .map_err(|e| js_err(ErrorContext::Api, e))?;
        opt_list(ErrorContext::Api, v)
    }

    async fn sign_tx(&self, tx: &Cbor, partial_sign: bool) -> Result<Cbor, ConnectorError> {
        let v = self
            .inner
            .sign_tx(tx.as_str(), partial_sign)
            .await
            .map_err(|e| js_err(ErrorContext::TxSign, e))?;
        from_js(ErrorContext::TxSign, v)
    }

    async fn sign_data(
        &self,
        address: &Cbor,
        payload: &HexBytes,
    ) -> Result<DataSignature, ConnectorError> {
        let v = self
            .inner
            .sign_data(address.as_str(), payload.as_str())
            .await
            .map_err(|e| js_err(ErrorContext::DataSign, e))?;
        from_js(ErrorContext::DataSign, v)
    }

    async fn submit_tx(&self, tx: &Cbor) -> Result<String, ConnectorError> {
        let v = self
            .inner
            .submit_tx(tx.as_str())
            .await
            .map_err(|e| js_err(ErrorContext::TxSend, e))?;
        v.as_string().ok_or_else(|| {
            ConnectorError::classify(
                ErrorContext::TxSend,
                None,
                "submitTx resolved to a non-string value".to_string(),
            )
        })
    }
}
