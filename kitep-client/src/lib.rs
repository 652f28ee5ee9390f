//! Kitep Client
//!
//! The remote data client for the library backend: typed fetches for books
//! and categories, the combined snapshot load, and download URL resolution.
//! Every failure surfaces as a [`kitep_core::FetchError`] value so the
//! presentation layer can offer a retry.

pub mod client;
pub mod download;
pub mod snapshot;

pub use client::{HttpLibraryClient, RemoteLibrary};
pub use download::resolve_file_url;
pub use snapshot::load_snapshot;
