//! Transport implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleTransport;
pub use file::FileTransport;
pub use memory::MemoryTransport;

// Re-export the trait alongside its implementations
pub use crate::core::Transport;
