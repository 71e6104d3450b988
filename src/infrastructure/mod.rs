// src/infrastructure/mod.rs
pub mod boundary;
pub mod memory;
pub mod seed;

pub use seed::SeedFile;
