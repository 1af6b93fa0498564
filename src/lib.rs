// src/lib.rs

pub mod config;
pub mod domain;
pub mod http_api;
pub mod model;

#[cfg(test)]
mod devtools;
