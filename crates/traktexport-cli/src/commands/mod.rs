pub mod auth;
pub mod export;
pub mod inspect;
pub mod merge;
pub mod prompts;
