// src/core.rs
pub mod compare;
pub mod diversity;
pub mod frequency;
pub mod loader;
