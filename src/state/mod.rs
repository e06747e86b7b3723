//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cart`, `toasts`, etc.) so
//! individual pages and components can depend on small focused models.
//! Every state struct here is a plain value provided as an `RwSignal`
//! context at the app root; nothing is a hidden global.

pub mod cart;
pub mod catalog;
pub mod confirm;
pub mod loading;
pub mod session;
pub mod toasts;
