pub mod api;
pub mod config;
pub mod state;
pub mod types;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
