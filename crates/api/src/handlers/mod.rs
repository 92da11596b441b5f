pub mod admin;
pub mod contact;
pub mod content;
pub mod generation;
pub mod models;
pub mod saved_names;
pub mod tools;
