pub mod catalog;
pub mod config;
pub mod edm;
pub mod metadata;
pub mod service;
