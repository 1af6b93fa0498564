// src/devtools/mod.rs

pub mod upstream;
