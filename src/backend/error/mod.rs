//! Backend Error Module
//!
//! Defines the error type used by HTTP handlers and the messaging core,
//! and its conversion to HTTP responses.
//!
//! - **`types`** - Error type definition and constructors
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
