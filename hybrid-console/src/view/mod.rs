//! View components for the Hybrid Console application.

pub mod components;
pub mod icons;
pub mod status;
pub mod theme;
