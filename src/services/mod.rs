// src/services/mod.rs
pub mod chat;
pub mod profile;
pub mod upstream;
pub mod weather;
