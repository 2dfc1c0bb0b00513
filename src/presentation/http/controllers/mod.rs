// src/presentation/http/controllers/mod.rs
pub mod pages;
pub mod posts;
