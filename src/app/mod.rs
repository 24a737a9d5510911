pub mod pages;
pub mod sessions;
