//! Orrery - Animated Solar-System Visualization
//!
//! A library crate exposing the visualization's components
//! for testing and integration purposes.

pub mod bodies;
pub mod camera;
pub mod clock;
pub mod orbit;
pub mod scene;
