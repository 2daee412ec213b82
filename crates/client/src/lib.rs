//! `yapp-client` library crate.
//!
//! [`api::ApiClient`] speaks the items HTTP API; [`view::ItemsView`] keeps
//! the local view of the item list in step with the server. The terminal
//! front end lives in `main.rs`.

pub mod api;
pub mod view;
