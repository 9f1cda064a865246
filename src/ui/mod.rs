//! Terminal presentation surface and the interactive loop around it.
//!
//! - [`surface`]: the [`crate::core::surface::PresentationSurface`] the
//!   renderer paints, including the animation clock.
//! - [`app`], [`keybindings`] and [`event_loop`]: event dispatch into the
//!   controller.
//! - [`renderer`], [`effects`], [`picker`] and [`theme`]: frame output.
//!
//! Ownership boundary: this layer captures input and paints state, while
//! [`crate::core`] owns the selection and decides what changes.

pub mod app;
pub mod effects;
pub mod event_loop;
pub mod keybindings;
pub mod lifecycle;
pub mod picker;
pub mod renderer;
pub mod surface;
pub mod theme;
