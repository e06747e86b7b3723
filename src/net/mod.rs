//! Network layer: REST client and wire types.
//!
//! `api` is the only module that talks to the backend; everything above
//! it consumes typed results and never sees raw HTTP statuses.

pub mod api;
pub mod types;
