//! A small web application for keeping a travel wishlist.
//!
//! Places start on the wishlist and move to the visited list once marked.
//! Pages are rendered server-side from a SQLite-backed store.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod templates;
