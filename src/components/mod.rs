//! Reusable UI components shared across pages.

pub mod confirm_dialog;
pub mod loading_button;
pub mod loading_overlay;
pub mod nav_bar;
pub mod product_card;
pub mod toast_host;
