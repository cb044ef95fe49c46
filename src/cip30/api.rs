//! Boundary traits for the externally supplied wallet objects.
//!
//! The browser hands us two kinds of object: the per-wallet descriptor
//! sitting in the global registry, and the connection object returned by
//! `enable`. Each is modelled as a trait so the façade in
//! [`connector`](super::connector) stays independent of the host, and so the
//! test suite can drive it with stubs off-browser.
//!
//! All async methods are `?Send`: browser futures are thread-local.

use async_trait::async_trait;

use super::types::{Cbor, DataSignature, Extension, HexBytes, NetworkId, Paginate};
use crate::error::ConnectorError;

/// The registry of injected wallets (`window.cardano` in a browser).
pub trait WalletRegistry {
    type Descriptor: WalletDescriptor;

    /// Every key present in the registry, available or not.
    fn names(&self) -> Vec<String>;

    /// Synchronous availability check for one key: does the entry look like
    /// a CIP-30 wallet that can be enabled right now?
    fn is_available(&self, name: &str) -> bool;

    /// Fetch the descriptor for a key, `None` when the key is absent.
    fn lookup(&self, name: &str) -> Option<Self::Descriptor>;
}

/// One wallet's entry in the registry: static metadata plus the two calls
/// that exist before a connection does.
#[async_trait(?Send)]
pub trait WalletDescriptor {
    type Api: WalletApi;

    fn api_version(&self) -> String;
    fn name(&self) -> String;
    fn icon(&self) -> String;
    fn supported_extensions(&self) -> Vec<Extension>;

    /// Ask the wallet (and through it, the user) for a connection. The
    /// wallet may grant only a subset of the requested extensions; callers
    /// re-query with [`WalletApi::get_extensions`].
    async fn enable(&self, extensions: &[Extension]) -> Result<Self::Api, ConnectorError>;

    /// Whether this wallet already considers itself connected to the current
    /// origin. Never prompts.
    async fn is_enabled(&self) -> Result<bool, ConnectorError>;
}

/// The connection object returned by `enable`. Pure pass-through: every
/// method forwards to the external wallet and surfaces its result or
/// rejection unchanged.
#[async_trait(?Send)]
pub trait WalletApi {
    async fn get_extensions(&self) -> Result<Vec<Extension>, ConnectorError>;

    async fn get_network_id(&self) -> Result<NetworkId, ConnectorError>;

    async fn get_balance(&self) -> Result<Cbor, ConnectorError>;

    async fn get_change_address(&self) -> Result<Cbor, ConnectorError>;

    async fn get_reward_addresses(&self) -> Result<Vec<Cbor>, ConnectorError>;

    async fn get_unused_addresses(&self) -> Result<Vec<Cbor>, ConnectorError>;

    async fn get_used_addresses(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Vec<Cbor>, ConnectorError>;

    /// `None` means the wallet declined to enumerate UTXOs, which is
    /// distinct from owning none (`Some` of an empty list).
    async fn get_utxos(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Option<Vec<Cbor>>, ConnectorError>;

    /// `None` means no suitable collateral, or the wallet declines to
    /// report it.
    async fn get_collateral(&self, amount: &Cbor) -> Result<Option<Vec<Cbor>>, ConnectorError>;

    async fn sign_tx(&self, tx: &Cbor, partial_sign: bool) -> Result<Cbor, ConnectorError>;

    async fn sign_data(
        &self,
        address: &Cbor,
        payload: &HexBytes,
    ) -> Result<DataSignature, ConnectorError>;

    async fn submit_tx(&self, tx: &Cbor) -> Result<String, ConnectorError>;
}
