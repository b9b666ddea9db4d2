pub mod catalog;
pub mod chat;
pub mod directory;
pub mod error;
pub mod guidance;
pub mod mcp_api;
pub mod model;
pub mod picker;
pub mod resolver;
pub mod specialists;
pub mod topics;

pub use chat::{classify, select_chat_response, select_response_with};
pub use resolver::{resolve_guidance, Resolution, Resolver};
