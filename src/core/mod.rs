//! Selection state, the controller that drives a presentation surface, and
//! the user configuration it is built from. Nothing here touches a terminal.

pub mod config;
pub mod controller;
pub mod feedback;
pub mod palette;
pub mod selection;
pub mod surface;
