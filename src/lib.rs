#[macro_use]
extern crate lazy_static;

pub mod cacher;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod month;
pub mod projector;
pub mod requester;
pub mod timeline;
