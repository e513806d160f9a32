//! Trait definitions (hexagonal ports). Depend only on domain and error types.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐      ┌──────────────┐
//!   │   Console    │ ───> │   Catalog    │ ───> │    Store     │
//!   │ (inbound)    │      │ (service)    │      │ (outbound)   │
//!   └──────────────┘      └──────────────┘      └──────────────┘
//! ```
//!
//! - [`inbound::console::Console`] - line-oriented user interaction
//! - [`outbound::store::Store`] - persistence for countries, cities and addresses

pub mod inbound;
pub mod outbound;
