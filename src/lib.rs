//! Toolprompt — renders tool-use protocol instructions for chat agents.
//!
//! Given the callable tools (name, description, JSON schema text) and
//! optional custom instructions, produces the markdown document that tells a
//! language model how to request function calls and which tools exist.

pub mod config;
pub mod instructions;
pub mod render;
pub mod tools;
pub mod types;

pub use instructions::CustomInstructions;
pub use render::{render_instructions, InstructionRenderer, PlatformRegistry};
pub use types::Tool;
