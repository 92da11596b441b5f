pub mod ai_model;
pub mod contact_submission;
pub mod content_block;
pub mod saved_name;
pub mod tool;
