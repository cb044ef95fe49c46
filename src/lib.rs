//! CIP-30 wallet connector: typed access to browser-injected Cardano wallets.
//!
//! Wallet extensions register themselves under `window.cardano`; this crate
//! discovers those entries, negotiates a connection, and exposes the CIP-30
//! operation set with Rust types at the boundary. It is a pass-through
//! layer: payloads stay hex-encoded CBOR and are never decoded, and every
//! wallet failure is surfaced verbatim.
//!
//! # Architecture
//!
//! ```text
//! Connector (discovery over a WalletRegistry)
//!   │
//!   ├── Wallet (descriptor: apiVersion, name, icon, isEnabled, enable)
//!   │
//!   └── Connection (enabled wallet: balance, addresses, UTXOs,
//!                   collateral, network id, signTx, signData, submitTx)
//! ```
//!
//! The core is generic over three boundary traits ([`WalletRegistry`],
//! [`WalletDescriptor`], [`WalletApi`]) so it runs against stubs in native
//! tests; the `wasm` feature adds the browser implementation.
//!
//! # Usage (browser, feature `wasm`)
//!
//! ```ignore
//! use cip30_connector::wasm::browser_connector;
//!
//! let connector = browser_connector();
//! for name in connector.available_wallets() {
//!     tracing::info!("wallet installed: {name}");
//! }
//!
//! let wallet = connector.wallet("eternl")?;
//! let conn = wallet.enable(&[]).await?;
//! let network = conn.get_network_id().await?;
//! let txid = conn.submit_tx(&signed_tx).await?;
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod cip30;
pub mod error;

// =============================================================================
// WASM-only modules (browser, window.cardano, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports: Shared
// =============================================================================
pub use cip30::{
    Cbor, Connection, Connector, DataSignature, Extension, HexBytes, NetworkId, Paginate, Wallet,
    WalletApi, WalletDescriptor, WalletRegistry,
};
pub use error::{ConnectorError, ErrorContext};

// =============================================================================
// Re-exports: WASM
// =============================================================================
#[cfg(feature = "wasm")]
pub use wasm::{browser_connector, BrowserRegistry};
