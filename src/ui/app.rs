//! Interactive state around the controller: focus, cursors and hit regions.
//!
//! This is the event-dispatch layer. It turns key presses and clicks into
//! controller calls and owns nothing the controller owns.

use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::core::config::Config;
use crate::core::controller::SelectionController;
use crate::core::selection::OptionList;
use crate::ui::keybindings::UiAction;
use crate::ui::picker::PickerState;
use crate::ui::surface::TerminalSurface;
use crate::ui::theme::Theme;
use crate::utils::color::ColorDepth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Colors,
    Animations,
    Buttons,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Colors => Focus::Animations,
            Focus::Animations => Focus::Buttons,
            Focus::Buttons => Focus::Colors,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Colors => Focus::Buttons,
            Focus::Animations => Focus::Colors,
            Focus::Buttons => Focus::Animations,
        }
    }

    pub fn list(self) -> Option<OptionList> {
        match self {
            Focus::Colors => Some(OptionList::Color),
            Focus::Animations => Some(OptionList::Animation),
            Focus::Buttons => None,
        }
    }

    fn for_list(list: OptionList) -> Self {
        match list {
            OptionList::Color => Focus::Colors,
            OptionList::Animation => Focus::Animations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Apply,
    Reset,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::Apply, Button::Reset];

    pub fn label(self) -> &'static str {
        match self {
            Button::Apply => "Apply",
            Button::Reset => "Reset",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Button::Apply => Button::Reset,
            Button::Reset => Button::Apply,
        }
    }
}

/// Something a mouse click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Option(OptionList, &'static str),
    Button(Button),
}

pub struct UiApp {
    pub controller: SelectionController<TerminalSurface>,
    pub color_picker: PickerState,
    pub animation_picker: PickerState,
    pub focus: Focus,
    pub button: Button,
    pub theme: Theme,
    pub color_depth: ColorDepth,
    /// Regions recorded by the last draw, in paint order.
    pub hit_map: Vec<(Rect, HitTarget)>,
    pub exit_requested: bool,
}

impl UiApp {
    pub fn new(config: &Config, theme: Theme, color_depth: ColorDepth, now: Instant) -> Self {
        let surface = TerminalSurface::new(config.animation_duration(), now);
        let controller =
            SelectionController::new(surface, config.palette(), config.feedback_duration());
        Self {
            controller,
            color_picker: PickerState::new(OptionList::Color),
            animation_picker: PickerState::new(OptionList::Animation),
            focus: Focus::Colors,
            button: Button::Apply,
            theme: theme.quantized(color_depth),
            color_depth,
            hit_map: Vec::new(),
            exit_requested: false,
        }
    }

    pub fn picker(&self, list: OptionList) -> &PickerState {
        match list {
            OptionList::Color => &self.color_picker,
            OptionList::Animation => &self.animation_picker,
        }
    }

    pub fn picker_mut(&mut self, list: OptionList) -> &mut PickerState {
        match list {
            OptionList::Color => &mut self.color_picker,
            OptionList::Animation => &mut self.animation_picker,
        }
    }

    /// Run one key action. Returns whether the screen needs a redraw.
    pub fn handle_action(&mut self, action: UiAction, now: Instant) -> bool {
        match action {
            UiAction::Quit => {
                self.exit_requested = true;
            }
            UiAction::FocusNext => self.focus = self.focus.next(),
            UiAction::FocusPrev => self.focus = self.focus.prev(),
            UiAction::CursorPrev | UiAction::CursorNext => match self.focus.list() {
                Some(list) => {
                    let picker = self.picker_mut(list);
                    if action == UiAction::CursorPrev {
                        picker.move_prev();
                    } else {
                        picker.move_next();
                    }
                }
                None => self.button = self.button.toggled(),
            },
            UiAction::Activate => match self.focus.list() {
                Some(list) => {
                    if let Some(id) = self.picker(list).cursor_id() {
                        self.controller.select_option(list, id);
                    }
                }
                None => self.press(self.button, now),
            },
            UiAction::Apply => self.press(Button::Apply, now),
            UiAction::Reset => self.press(Button::Reset, now),
        }
        true
    }

    /// Route a left click. Clicks outside every recorded region are ignored.
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let position = Position::new(column, row);
        let Some(target) = self
            .hit_map
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
        else {
            debug!(column, row, "click outside any option");
            return false;
        };

        match target {
            HitTarget::Option(list, id) => {
                self.focus = Focus::for_list(list);
                self.picker_mut(list).focus_id(id);
                self.controller.select_option(list, id);
            }
            HitTarget::Button(button) => {
                self.focus = Focus::Buttons;
                self.button = button;
                self.press(button, now);
            }
        }
        true
    }

    /// Advance the animation clock and the feedback timer. Returns whether
    /// anything visible changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let finished = self.controller.surface_mut().advance(now);
        let expired = self.controller.tick(now);
        finished || expired || self.controller.surface().is_animating()
    }

    fn press(&mut self, button: Button, now: Instant) {
        match button {
            Button::Apply => {
                self.controller.apply_at(now);
            }
            Button::Reset => {
                self.controller.reset();
                self.color_picker.cursor = 0;
                self.animation_picker.cursor = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::SELECT_PROMPT;
    use crate::core::palette::{ColorKey, DEFAULT_COLOR};
    use std::time::Duration;

    fn app(now: Instant) -> UiApp {
        UiApp::new(
            &Config::default(),
            Theme::dark_default(),
            ColorDepth::Truecolor,
            now,
        )
    }

    #[test]
    fn keyboard_pick_and_apply() {
        let now = Instant::now();
        let mut app = app(now);

        app.handle_action(UiAction::CursorNext, now);
        app.handle_action(UiAction::Activate, now);
        app.handle_action(UiAction::FocusNext, now);
        app.handle_action(UiAction::CursorNext, now);
        app.handle_action(UiAction::CursorNext, now);
        app.handle_action(UiAction::Activate, now);
        app.handle_action(UiAction::Apply, now);

        let heading = app.controller.surface().heading();
        assert_eq!(heading.color, ColorKey::Blue.builtin_value());
        assert!(heading.has_class("animate-shake"));
        assert!(heading.is_highlighted(OptionList::Color, "blue"));
        assert!(heading.is_highlighted(OptionList::Animation, "shake"));
    }

    #[test]
    fn apply_button_without_pick_shows_prompt_until_it_expires() {
        let now = Instant::now();
        let mut app = app(now);
        app.focus = Focus::Buttons;
        app.handle_action(UiAction::Activate, now);

        assert_eq!(
            app.controller.surface().heading().feedback.as_deref(),
            Some(SELECT_PROMPT)
        );
        assert!(app.advance(now + Duration::from_secs(3)));
        assert_eq!(app.controller.surface().heading().feedback, None);
    }

    #[test]
    fn clicks_route_through_the_hit_map() {
        let now = Instant::now();
        let mut app = app(now);
        app.hit_map = vec![
            (
                Rect::new(0, 0, 8, 1),
                HitTarget::Option(OptionList::Color, "red"),
            ),
            (Rect::new(0, 2, 8, 1), HitTarget::Button(Button::Apply)),
            (Rect::new(10, 2, 8, 1), HitTarget::Button(Button::Reset)),
        ];

        assert!(!app.handle_click(30, 30, now));
        assert!(app.handle_click(3, 0, now));
        assert_eq!(app.focus, Focus::Colors);
        assert_eq!(app.color_picker.cursor_id(), Some("red"));

        assert!(app.handle_click(1, 2, now));
        assert_eq!(
            app.controller.surface().heading().color,
            ColorKey::Red.builtin_value()
        );

        assert!(app.handle_click(12, 2, now));
        assert_eq!(app.controller.surface().heading().color, DEFAULT_COLOR);
        assert!(app.controller.selection().is_untouched());
    }

    #[test]
    fn quit_sets_exit_flag() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle_action(UiAction::Quit, now);
        assert!(app.exit_requested);
    }

    #[test]
    fn button_cursor_toggles_with_arrows() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle_action(UiAction::FocusPrev, now);
        assert_eq!(app.focus, Focus::Buttons);
        app.handle_action(UiAction::CursorNext, now);
        assert_eq!(app.button, Button::Reset);
    }
}
