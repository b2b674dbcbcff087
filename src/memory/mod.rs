/*!
 * Memory Module
 * Fixed-capacity memory pool shared by running processes
 */

pub mod pool;
pub mod types;

// Re-export for convenience
pub use pool::MemoryPool;
pub use types::*;
