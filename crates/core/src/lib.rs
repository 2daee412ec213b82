//! Domain types and rules shared by the Yapp store, API service and client.

pub mod error;
pub mod item;
pub mod types;
