//! CIP-30 wallet connector core.
//!
//! Host-independent: everything here is generic over the boundary traits in
//! [`api`], so it compiles and tests on any target. The browser wiring lives
//! in the crate's `wasm` module behind the `wasm` feature.

pub mod api;
pub mod connector;
pub mod types;

pub use api::{WalletApi, WalletDescriptor, WalletRegistry};
pub use connector::{Connection, Connector, Wallet};
pub use types::{Cbor, DataSignature, Extension, HexBytes, NetworkId, Paginate};
