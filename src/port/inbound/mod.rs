//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`console`]: prompt/response surface driven by the interactive menu

pub mod console;
