//! The capability the controller drives, plus a recording implementation.
//!
//! A [`PresentationSurface`] owns the heading (text color and class list), the
//! "selected" markers of both option lists, and a feedback text region. The
//! controller never reads from it; it only issues commands.

use std::fmt;

use crate::core::palette::{Rgb, ANIMATION_CLASSES, DEFAULT_COLOR};
use crate::core::selection::OptionList;

/// One-shot subscription fired when the running heading animation finishes.
/// The surface drops it after the first invocation.
pub type AnimationEndCallback = Box<dyn FnOnce(&mut dyn PresentationSurface)>;

pub trait PresentationSurface {
    fn set_heading_color(&mut self, color: Rgb);

    /// Add a class to the heading. Adding a class that is already present is a no-op.
    fn add_heading_class(&mut self, class: &str);

    fn remove_heading_class(&mut self, class: &str);

    /// Drop the "selected" marker from every option in `list`.
    fn clear_highlights(&mut self, list: OptionList);

    fn highlight_option(&mut self, list: OptionList, option_id: &str);

    fn set_feedback(&mut self, message: &str);

    fn clear_feedback(&mut self);

    fn once_animation_end(&mut self, callback: AnimationEndCallback);
}

/// Commands as issued, in order. Used for headless transcripts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    SetHeadingColor(Rgb),
    AddHeadingClass(String),
    RemoveHeadingClass(String),
    ClearHighlights(OptionList),
    HighlightOption(OptionList, String),
    SetFeedback(String),
    ClearFeedback,
    AwaitAnimationEnd,
}

impl fmt::Display for SurfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCommand::SetHeadingColor(color) => write!(f, "set-color {color}"),
            SurfaceCommand::AddHeadingClass(class) => write!(f, "add-class {class}"),
            SurfaceCommand::RemoveHeadingClass(class) => write!(f, "remove-class {class}"),
            SurfaceCommand::ClearHighlights(list) => write!(f, "clear-highlights {list}"),
            SurfaceCommand::HighlightOption(list, id) => write!(f, "highlight {list} {id}"),
            SurfaceCommand::SetFeedback(message) => write!(f, "feedback \"{message}\""),
            SurfaceCommand::ClearFeedback => f.write_str("clear-feedback"),
            SurfaceCommand::AwaitAnimationEnd => f.write_str("await-animation-end"),
        }
    }
}

/// What a surface currently shows. Shared by the recording and terminal surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingModel {
    pub color: Rgb,
    pub classes: Vec<String>,
    pub color_highlights: Vec<String>,
    pub animation_highlights: Vec<String>,
    pub feedback: Option<String>,
}

impl Default for HeadingModel {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            classes: Vec::new(),
            color_highlights: Vec::new(),
            animation_highlights: Vec::new(),
            feedback: None,
        }
    }
}

impl HeadingModel {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    /// First animation class on the heading, if any.
    pub fn animation_class(&self) -> Option<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .find(|class| ANIMATION_CLASSES.contains(class))
    }

    pub fn animation_class_count(&self) -> usize {
        self.classes
            .iter()
            .filter(|class| ANIMATION_CLASSES.contains(&class.as_str()))
            .count()
    }

    pub fn highlights(&self, list: OptionList) -> &[String] {
        match list {
            OptionList::Color => &self.color_highlights,
            OptionList::Animation => &self.animation_highlights,
        }
    }

    pub fn highlights_mut(&mut self, list: OptionList) -> &mut Vec<String> {
        match list {
            OptionList::Color => &mut self.color_highlights,
            OptionList::Animation => &mut self.animation_highlights,
        }
    }

    pub fn is_highlighted(&self, list: OptionList, option_id: &str) -> bool {
        self.highlights(list).iter().any(|id| id == option_id)
    }
}

/// Keeps a [`HeadingModel`] and the ordered command stream. Animations finish
/// only when [`RecordingSurface::finish_animation`] is called.
#[derive(Default)]
pub struct RecordingSurface {
    heading: HeadingModel,
    commands: Vec<SurfaceCommand>,
    pending: Vec<AnimationEndCallback>,
}

impl fmt::Debug for RecordingSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSurface")
            .field("heading", &self.heading)
            .field("commands", &self.commands)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&self) -> &HeadingModel {
        &self.heading
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn pending_animation_callbacks(&self) -> usize {
        self.pending.len()
    }

    /// Deliver the animation-finished notification. Returns how many callbacks ran.
    pub fn finish_animation(&mut self) -> usize {
        let callbacks = std::mem::take(&mut self.pending);
        let fired = callbacks.len();
        for callback in callbacks {
            callback(&mut *self);
        }
        fired
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_heading_color(&mut self, color: Rgb) {
        self.heading.color = color;
        self.commands.push(SurfaceCommand::SetHeadingColor(color));
    }

    fn add_heading_class(&mut self, class: &str) {
        self.heading.add_class(class);
        self.commands
            .push(SurfaceCommand::AddHeadingClass(class.to_string()));
    }

    fn remove_heading_class(&mut self, class: &str) {
        self.heading.remove_class(class);
        if self.heading.animation_class().is_none() {
            self.pending.clear();
        }
        self.commands
            .push(SurfaceCommand::RemoveHeadingClass(class.to_string()));
    }

    fn clear_highlights(&mut self, list: OptionList) {
        self.heading.highlights_mut(list).clear();
        self.commands.push(SurfaceCommand::ClearHighlights(list));
    }

    fn highlight_option(&mut self, list: OptionList, option_id: &str) {
        let highlights = self.heading.highlights_mut(list);
        if !highlights.iter().any(|id| id == option_id) {
            highlights.push(option_id.to_string());
        }
        self.commands
            .push(SurfaceCommand::HighlightOption(list, option_id.to_string()));
    }

    fn set_feedback(&mut self, message: &str) {
        self.heading.feedback = Some(message.to_string());
        self.commands
            .push(SurfaceCommand::SetFeedback(message.to_string()));
    }

    fn clear_feedback(&mut self) {
        self.heading.feedback = None;
        self.commands.push(SurfaceCommand::ClearFeedback);
    }

    fn once_animation_end(&mut self, callback: AnimationEndCallback) {
        self.pending.push(callback);
        self.commands.push(SurfaceCommand::AwaitAnimationEnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_behave_like_a_class_list() {
        let mut heading = HeadingModel::default();
        assert!(heading.add_class("animate-fade"));
        assert!(!heading.add_class("animate-fade"));
        assert!(heading.add_class("title"));
        assert_eq!(heading.animation_class(), Some("animate-fade"));
        assert_eq!(heading.animation_class_count(), 1);
        assert!(heading.remove_class("animate-fade"));
        assert!(!heading.remove_class("animate-fade"));
        assert_eq!(heading.animation_class(), None);
    }

    #[test]
    fn callbacks_fire_once_then_drop() {
        let mut surface = RecordingSurface::new();
        surface.add_heading_class("animate-bounce");
        surface.once_animation_end(Box::new(|surface: &mut dyn PresentationSurface| {
            surface.remove_heading_class("animate-bounce");
        }));
        assert_eq!(surface.pending_animation_callbacks(), 1);

        assert_eq!(surface.finish_animation(), 1);
        assert!(!surface.heading().has_class("animate-bounce"));
        assert_eq!(surface.finish_animation(), 0);
    }

    #[test]
    fn removing_the_animation_class_cancels_its_callback() {
        let mut surface = RecordingSurface::new();
        surface.add_heading_class("animate-fade");
        surface.once_animation_end(Box::new(|surface: &mut dyn PresentationSurface| {
            surface.remove_heading_class("animate-fade");
        }));
        surface.add_heading_class("title");

        surface.remove_heading_class("title");
        assert_eq!(surface.pending_animation_callbacks(), 1);
        surface.remove_heading_class("animate-fade");
        assert_eq!(surface.pending_animation_callbacks(), 0);
        assert_eq!(surface.finish_animation(), 0);
    }

    #[test]
    fn commands_render_one_per_line() {
        let command = SurfaceCommand::HighlightOption(OptionList::Color, "blue".to_string());
        assert_eq!(command.to_string(), "highlight color blue");
        assert_eq!(
            SurfaceCommand::SetHeadingColor(DEFAULT_COLOR).to_string(),
            "set-color #505050"
        );
    }
}
