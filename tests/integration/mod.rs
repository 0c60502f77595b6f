//! Integration tests for the value object contract.

pub mod ambient_culture;
pub mod custom_formatting;
pub mod object_graph;
pub mod scenarios;
pub mod serde_wire;
