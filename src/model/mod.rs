//! Input data model: funnels and their triggers.

pub mod funnel;
pub mod trigger;

pub use funnel::{FunnelNode, TriggerConfig};
pub use trigger::{TriggerCategory, TriggerType};
