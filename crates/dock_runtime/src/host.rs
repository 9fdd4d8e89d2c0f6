//! Host-boundary effects: catalog boot and gesture persistence.

pub mod boot;
pub mod pin_actions;
