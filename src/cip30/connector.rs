//! Typed façade over a wallet registry.
//!
//! Three layers mirroring the external object model:
//!
//! ```text
//! Connector<R>            registry: discovery + lookup
//!     │ wallet(name)
//!     ▼
//! Wallet<D>               descriptor: metadata, is_enabled, enable
//!     │ enable(&[ext])
//!     ▼
//! Connection<A>           connection object: reads + actions
//! ```
//!
//! Every operation forwards to the external object; the only work done here
//! is tracing and surfacing `NotFound` for unknown registry keys. There is
//! no disconnect: the standard defines no teardown, so a [`Connection`]
//! stays valid until the page session ends or the wallet revokes it, which
//! shows up as failing calls or `is_enabled()` turning false.

use tracing::debug;

use super::api::{WalletApi, WalletDescriptor, WalletRegistry};
use super::types::{Cbor, DataSignature, Extension, HexBytes, NetworkId, Paginate};
use crate::error::ConnectorError;

/// Entry point: wraps a [`WalletRegistry`] and answers discovery queries.
pub struct Connector<R: WalletRegistry> {
    registry: R,
}

impl<R: WalletRegistry> Connector<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Registry keys whose availability check passes right now. A snapshot:
    /// never fails, and an empty (or missing) registry yields an empty list.
    pub fn available_wallets(&self) -> Vec<String> {
        let names: Vec<String> = self
            .registry
            .names()
            .into_iter()
            .filter(|n| self.registry.is_available(n))
            .collect();
        debug!(count = names.len(), "enumerated available wallets");
        names
    }

    /// Look up one wallet by registry key.
    pub fn wallet(&self, name: &str) -> Result<Wallet<R::Descriptor>, ConnectorError> {
        match self.registry.lookup(name) {
            Some(descriptor) => Ok(Wallet {
                name: name.to_string(),
                descriptor,
            }),
            None => {
                debug!(wallet = name, "wallet not in registry");
                Err(ConnectorError::NotFound(name.to_string()))
            }
        }
    }

    /// Convenience: look up every available wallet in one pass.
    pub fn wallets(&self) -> Vec<Wallet<R::Descriptor>> {
        self.available_wallets()
            .into_iter()
            .filter_map(|name| self.wallet(&name).ok())
            .collect()
    }
}

/// A wallet known to the registry, not yet (necessarily) connected.
///
/// Metadata accessors are synchronous and need no user interaction;
/// [`Wallet::enable`] is where the permission prompt happens.
pub struct Wallet<D: WalletDescriptor> {
    name: String,
    descriptor: D,
}

impl<D: WalletDescriptor> core::fmt::Debug for Wallet<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<D: WalletDescriptor> Wallet<D> {
    /// The registry key this wallet was looked up under.
    pub fn registry_key(&self) -> &str {
        &self.name
    }

    pub fn api_version(&self) -> String {
        self.descriptor.api_version()
    }

    /// Human-readable wallet name (may differ from the registry key).
    pub fn name(&self) -> String {
        self.descriptor.name()
    }

    /// Wallet icon as a data URI.
    pub fn icon(&self) -> String {
        self.descriptor.icon()
    }

    pub fn supported_extensions(&self) -> Vec<Extension> {
        self.descriptor.supported_extensions()
    }

    /// Whether the wallet already considers this origin connected. Never
    /// prompts; safe to poll.
    pub async fn is_enabled(&self) -> Result<bool, ConnectorError> {
        self.descriptor.is_enabled().await
    }

    /// Request a connection, prompting the user if needed. The wallet may
    /// grant only a subset of `extensions`; re-query with
    /// [`Connection::get_extensions`].
    pub async fn enable(&self, extensions: &[Extension]) -> Result<Connection<D::Api>, ConnectorError> {
        debug!(wallet = %self.name, requested = extensions.len(), "enabling wallet");
        let api = self.descriptor.enable(extensions).await?;
        debug!(wallet = %self.name, "wallet enabled");
        Ok(Connection { api })
    }
}

/// A live connection to an enabled wallet.
///
/// Caller-owned for its whole lifetime; holds no state of its own. Every
/// method is async, may suspend until the wallet answers, and forwards the
/// wallet's result or rejection unchanged. Concurrent calls on one
/// connection carry no ordering guarantee.
pub struct Connection<A: WalletApi> {
    api: A,
}

impl<A: WalletApi> core::fmt::Debug for Connection<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

impl<A: WalletApi> Connection<A> {
    /// Extensions actually granted for this connection.
    pub async fn get_extensions(&self) -> Result<Vec<Extension>, ConnectorError> {
        self.api.get_extensions().await
    }

    pub async fn get_network_id(&self) -> Result<NetworkId, ConnectorError> {
        self.api.get_network_id().await
    }

    /// Total balance as one opaque CBOR value.
    pub async fn get_balance(&self) -> Result<Cbor, ConnectorError> {
        self.api.get_balance().await
    }

    pub async fn get_change_address(&self) -> Result<Cbor, ConnectorError> {
        self.api.get_change_address().await
    }

    pub async fn get_reward_addresses(&self) -> Result<Vec<Cbor>, ConnectorError> {
        self.api.get_reward_addresses().await
    }

    pub async fn get_unused_addresses(&self) -> Result<Vec<Cbor>, ConnectorError> {
        self.api.get_unused_addresses().await
    }

    /// Used addresses, optionally paginated. The hint is forwarded as-is;
    /// wallets are free to ignore it and nothing is paginated locally.
    pub async fn get_used_addresses(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Vec<Cbor>, ConnectorError> {
        self.api.get_used_addresses(paginate).await
    }

    /// UTXOs, tri-state: `None` when the wallet declines to enumerate,
    /// `Some(vec![])` when it owns none. The distinction comes from the
    /// wallet and is preserved, never collapsed.
    pub async fn get_utxos(
        &self,
        paginate: Option<Paginate>,
    ) -> Result<Option<Vec<Cbor>>, ConnectorError> {
        self.api.get_utxos(paginate).await
    }

    /// Collateral UTXOs covering at least `amount` (opaque CBOR quantity).
    /// `None` when the wallet has none suitable or declines to report.
    pub async fn get_collateral(
        &self,
        amount: &Cbor,
    ) -> Result<Option<Vec<Cbor>>, ConnectorError> {
        self.api.get_collateral(amount).await
    }

    /// Ask the wallet to sign `tx`. Returns the witness set, not the signed
    /// transaction. `partial_sign = true` tells the wallet more signatures
    /// will be gathered afterwards, so it must not reject the transaction
    /// just for missing some; the flag is forwarded verbatim.
    pub async fn sign_tx(&self, tx: &Cbor, partial_sign: bool) -> Result<Cbor, ConnectorError> {
        debug!(partial_sign, "requesting transaction signature");
        self.api.sign_tx(tx, partial_sign).await
    }

    /// Ask for a detached signature over `payload` with the key controlling
    /// `address`. Fails if the wallet does not control that address.
    pub async fn sign_data(
        &self,
        address: &Cbor,
        payload: &HexBytes,
    ) -> Result<DataSignature, ConnectorError> {
        debug!("requesting data signature");
        self.api.sign_data(address, payload).await
    }

    /// Submit a fully signed transaction through the wallet. Resolves to the
    /// transaction id string exactly as the wallet reported it.
    pub async fn submit_tx(&self, tx: &Cbor) -> Result<String, ConnectorError> {
        let txid = self.api.submit_tx(tx).await?;
        debug!(%txid, "transaction submitted");
        Ok(txid)
    }
}
