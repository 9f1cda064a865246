//! Marquee is a small terminal app that paints a heading with a picked color
//! and animation.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the palette, the selection state, the feedback timer and
//!   the [`core::controller::SelectionController`] that turns picks into
//!   commands on a [`core::surface::PresentationSurface`].
//! - [`ui`] implements that surface for the terminal, renders it with ratatui
//!   and runs the interactive event loop.
//! - [`cli`] parses arguments and dispatches to the interactive session, the
//!   headless `apply` transcript, or the config commands.
//! - [`utils`] holds terminal color handling and tracing setup.

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
