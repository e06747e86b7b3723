//! Page components, one per route.

pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod marketplace;
pub mod my_listings;
pub mod new_listing;
pub mod product_detail;
pub mod purchases;
