//! Read-only, paginated viewer over stored sensor anomaly records.
//!
//! [`engine::PageEngine`] turns a page number into a bounded, ordered
//! window over a [`store::RecordStore`], and [`rest`] serves the result as
//! HTML and JSON.

pub mod config;
pub mod db;
pub mod engine;
pub mod errors;
pub mod mapper;
pub mod metrics;
pub mod model;
pub mod pagination;
pub mod render;
pub mod rest;
pub mod store;
