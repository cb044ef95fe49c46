//! Extern declarations for the objects a CIP-30 wallet injects.
//!
//! Two object shapes cross the boundary: the descriptor sitting at
//! `window.cardano.<name>`, and the connection object its `enable` resolves
//! to. Both are declared here verbatim against the standard; all conversion
//! and classification happens one layer up in [`super::browser`].
//!
//! Every async method carries `catch` so a promise rejection arrives as
//! `Err(JsValue)` instead of aborting.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A wallet's descriptor at `window.cardano.<name>`.
    pub type Cip30WalletJs;

    #[wasm_bindgen(method, getter, js_name = apiVersion)]
    pub fn api_version(this: &Cip30WalletJs) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &Cip30WalletJs) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn icon(this: &Cip30WalletJs) -> String;

    /// Absent on wallets predating the extension revision; the caller
    /// treats anything non-array as an empty list.
    #[wasm_bindgen(method, getter, js_name = supportedExtensions)]
    pub fn supported_extensions(this: &Cip30WalletJs) -> JsValue;

    #[wasm_bindgen(method, catch)]
    pub async fn enable(this: &Cip30WalletJs, args: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = isEnabled)]
    pub async fn is_enabled(this: &Cip30WalletJs) -> Result<JsValue, JsValue>;

    /// The connection object `enable` resolves to.
    pub type Cip30ApiJs;

    #[wasm_bindgen(method, catch, js_name = getExtensions)]
    pub async fn get_extensions(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getNetworkId)]
    pub async fn get_network_id(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getBalance)]
    pub async fn get_balance(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getChangeAddress)]
    pub async fn get_change_address(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getRewardAddresses)]
    pub async fn get_reward_addresses(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getUnusedAddresses)]
    pub async fn get_unused_addresses(this: &Cip30ApiJs) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getUsedAddresses)]
    pub async fn get_used_addresses(
        this: &Cip30ApiJs,
        paginate: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getUtxos)]
    pub async fn get_utxos(this: &Cip30ApiJs, paginate: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getCollateral)]
    pub async fn get_collateral(this: &Cip30ApiJs, amount: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signTx)]
    pub async fn sign_tx(
        this: &Cip30ApiJs,
        tx: &str,
        partial_sign: bool,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signData)]
    pub async fn sign_data(
        this: &Cip30ApiJs,
        address: &str,
        payload: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = submitTx)]
    pub async fn submit_tx(this: &Cip30ApiJs, tx: &str) -> Result<JsValue, JsValue>;
}
