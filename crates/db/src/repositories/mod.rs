mod ai_model_repo;
mod contact_repo;
mod content_block_repo;
mod rate_limit_repo;
mod saved_name_repo;
mod tool_repo;

pub use ai_model_repo::AiModelRepo;
pub use contact_repo::ContactRepo;
pub use content_block_repo::ContentBlockRepo;
pub use rate_limit_repo::PgRateLimitStore;
pub use saved_name_repo::SavedNameRepo;
pub use tool_repo::ToolRepo;
