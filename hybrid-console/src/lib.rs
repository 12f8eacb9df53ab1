//! Hybrid Console - Status dashboard for Hybrid Mount devices.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod args;
pub mod confirm;
pub mod device;
pub mod message;
pub mod mock;
pub mod runner;
pub mod source;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use app::{ConsoleSettings, HybridConsole};
pub use message::Message;
