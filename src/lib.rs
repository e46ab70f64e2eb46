pub mod api;
pub mod config;
pub mod ip;
pub mod models;
pub mod storage;
