//! Core types used throughout the library.

pub mod audio;
pub mod message;
pub mod result;

// Re-export commonly used types
pub use audio::*;
pub use message::*;
pub use result::*;
