pub mod vault;
pub mod web;
