pub mod pages;
pub mod posts;
mod titles;
