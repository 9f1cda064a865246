use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::palette::{Rgb, ANIMATION_CLASSES};
use crate::core::selection::OptionList;
use crate::core::surface::{AnimationEndCallback, HeadingModel, PresentationSurface};
use crate::ui::effects::{effect_frame, EffectFrame, HeadingEffect};

/// Presentation surface painted by the terminal renderer.
///
/// The event loop moves its clock forward with [`TerminalSurface::advance`].
/// Adding an animation class (re)starts the animation at the current clock;
/// when it has played for the configured duration, the pending one-shot
/// callbacks run and are dropped.
pub struct TerminalSurface {
    heading: HeadingModel,
    animation_duration: Duration,
    animation_started: Option<Instant>,
    clock: Instant,
    pending: Vec<AnimationEndCallback>,
}

impl fmt::Debug for TerminalSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSurface")
            .field("heading", &self.heading)
            .field("animation_duration", &self.animation_duration)
            .field("animation_started", &self.animation_started)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl TerminalSurface {
    pub fn new(animation_duration: Duration, now: Instant) -> Self {
        Self {
            heading: HeadingModel::default(),
            animation_duration,
            animation_started: None,
            clock: now,
            pending: Vec::new(),
        }
    }

    pub fn heading(&self) -> &HeadingModel {
        &self.heading
    }

    pub fn is_animating(&self) -> bool {
        self.animation_started.is_some()
    }

    /// Progress of the running animation in `0.0..=1.0`.
    pub fn animation_progress(&self) -> Option<f32> {
        let started = self.animation_started?;
        if self.animation_duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = self.clock.saturating_duration_since(started);
        Some((elapsed.as_secs_f32() / self.animation_duration.as_secs_f32()).min(1.0))
    }

    /// Offset and opacity to paint the heading with on the current frame.
    pub fn effect_frame(&self) -> EffectFrame {
        let effect = self
            .heading
            .animation_class()
            .and_then(HeadingEffect::from_class);
        match (effect, self.animation_progress()) {
            (Some(effect), Some(progress)) => effect_frame(effect, progress),
            _ => EffectFrame::REST,
        }
    }

    /// Heading color blended toward `background` by the current opacity.
    pub fn painted_color(&self, background: Rgb) -> Rgb {
        let opacity = self.effect_frame().opacity;
        background.blend(self.heading.color, opacity)
    }

    /// Move the clock to `now`. Returns `true` when a running animation
    /// finished on this step.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.clock = now;
        let Some(started) = self.animation_started else {
            return false;
        };
        if now.saturating_duration_since(started) < self.animation_duration {
            return false;
        }

        self.animation_started = None;
        let callbacks = std::mem::take(&mut self.pending);
        debug!(callbacks = callbacks.len(), "heading animation finished");
        for callback in callbacks {
            callback(&mut *self);
        }
        true
    }
}

impl PresentationSurface for TerminalSurface {
    fn set_heading_color(&mut self, color: Rgb) {
        self.heading.color = color;
    }

    fn add_heading_class(&mut self, class: &str) {
        if self.heading.add_class(class) && ANIMATION_CLASSES.contains(&class) {
            self.animation_started = Some(self.clock);
        }
    }

    fn remove_heading_class(&mut self, class: &str) {
        self.heading.remove_class(class);
        if self.heading.animation_class().is_none() {
            self.animation_started = None;
            self.pending.clear();
        }
    }

    fn clear_highlights(&mut self, list: OptionList) {
        self.heading.highlights_mut(list).clear();
    }

    fn highlight_option(&mut self, list: OptionList, option_id: &str) {
        let highlights = self.heading.highlights_mut(list);
        if !highlights.iter().any(|id| id == option_id) {
            highlights.push(option_id.to_string());
        }
    }

    fn set_feedback(&mut self, message: &str) {
        self.heading.feedback = Some(message.to_string());
    }

    fn clear_feedback(&mut self) {
        self.heading.feedback = None;
    }

    fn once_animation_end(&mut self, callback: AnimationEndCallback) {
        self.pending.push(callback);
    }
}
