//! The selection controller.
//!
//! Holds the current [`SelectionState`] and a handle to a
//! [`PresentationSurface`]. Every public method is an event handler: it
//! performs a state transition and issues the matching surface commands. No
//! method fails; picks outside the known options are ignored.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::feedback::Feedback;
use crate::core::palette::{AnimationKey, ColorKey, Palette, ANIMATION_CLASSES};
use crate::core::selection::{Choice, OptionList, SelectionState};
use crate::core::surface::PresentationSurface;

/// Hint shown when apply is pressed before anything was picked.
pub const SELECT_PROMPT: &str = "Please select a color or animation";

pub struct SelectionController<S: PresentationSurface> {
    surface: S,
    palette: Palette,
    selection: SelectionState,
    feedback: Feedback,
}

impl<S: PresentationSurface> SelectionController<S> {
    /// Build a controller and bring the surface into the initial state, which
    /// is the same state `reset` produces.
    pub fn new(surface: S, palette: Palette, feedback_duration: Duration) -> Self {
        let mut controller = Self {
            surface,
            palette,
            selection: SelectionState::default(),
            feedback: Feedback::new(feedback_duration),
        };
        controller.restore_surface();
        controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Handle a pick in one of the option lists. `option_id` is the id carried
    /// by the picked option: a palette key or `"none"`.
    ///
    /// Returns `false` (and changes nothing) when the id is not part of `list`.
    pub fn select_option(&mut self, list: OptionList, option_id: &str) -> bool {
        let highlighted = match list {
            OptionList::Color => Choice::<ColorKey>::parse(option_id).map(|choice| {
                self.selection.color = choice;
                choice.option_id()
            }),
            OptionList::Animation => Choice::<AnimationKey>::parse(option_id).map(|choice| {
                self.selection.animation = choice;
                choice.option_id()
            }),
        };

        let Some(Some(highlighted)) = highlighted else {
            debug!(%list, option_id, "ignoring pick outside the option list");
            return false;
        };

        debug!(%list, option = highlighted, "option picked");
        self.surface.clear_highlights(list);
        self.surface.highlight_option(list, highlighted);
        self.hide_feedback();
        true
    }

    pub fn apply(&mut self) -> bool {
        self.apply_at(Instant::now())
    }

    /// Apply the current selection to the heading. With nothing picked in
    /// either list this only shows [`SELECT_PROMPT`] and returns `false`.
    pub fn apply_at(&mut self, now: Instant) -> bool {
        if self.selection.is_untouched() {
            debug!("apply without a selection");
            self.show_feedback_at(SELECT_PROMPT, now);
            return false;
        }

        let color = match self.selection.color {
            Choice::Key(key) => self.palette.color(key),
            Choice::Unset | Choice::None => self.palette.default_color(),
        };
        self.surface.set_heading_color(color);

        self.clear_animation_classes();
        if let Some(animation) = self.selection.animation.key() {
            let class = animation.class_name();
            self.surface.add_heading_class(class);
            self.surface
                .once_animation_end(Box::new(move |surface: &mut dyn PresentationSurface| {
                    surface.remove_heading_class(class);
                }));
        }

        debug!(
            %color,
            animation = self.selection.animation.option_id().unwrap_or("-"),
            "selection applied"
        );
        self.hide_feedback();
        true
    }

    /// Return selection, heading, highlights and feedback to the initial state.
    pub fn reset(&mut self) {
        debug!("selection reset");
        self.selection = SelectionState::default();
        self.restore_surface();
    }

    pub fn show_feedback(&mut self, message: impl Into<String>) {
        self.show_feedback_at(message, Instant::now());
    }

    /// Show `message`, replacing any visible one and restarting the timer.
    pub fn show_feedback_at(&mut self, message: impl Into<String>, now: Instant) {
        self.feedback.show(message, now);
        if let Some(message) = self.feedback.message() {
            self.surface.set_feedback(message);
        }
    }

    /// Hide the feedback message and drop its timer. Issues no command when
    /// nothing is visible.
    pub fn hide_feedback(&mut self) {
        if self.feedback.clear() {
            self.surface.clear_feedback();
        }
    }

    /// Timer event: hide the feedback message once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.feedback.expire(now) {
            self.surface.clear_feedback();
            return true;
        }
        false
    }

    fn clear_animation_classes(&mut self) {
        for class in ANIMATION_CLASSES {
            self.surface.remove_heading_class(class);
        }
    }

    fn restore_surface(&mut self) {
        self.surface.set_heading_color(self.palette.default_color());
        self.clear_animation_classes();
        for list in OptionList::ALL {
            self.surface.clear_highlights(list);
        }
        self.feedback.clear();
        self.surface.clear_feedback();
    }
}
