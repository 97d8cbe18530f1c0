pub mod tool;
pub mod tool_context;
pub mod tool_registry;

pub use tool::*;
pub use tool_context::*;
pub use tool_registry::*;
