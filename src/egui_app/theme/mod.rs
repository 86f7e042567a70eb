//! Theme Module
//!
//! Color scheme for the forum UI. Views pull constants from `colors`
//! directly; there is no runtime theming.

pub mod colors;

pub use colors::*;
