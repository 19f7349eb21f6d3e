//! UI layer: components, layout, theming, and the event-loop runtime.

pub mod components;
pub mod main;
pub mod modals;
pub mod runtime;
pub mod theme;
pub mod utils;
