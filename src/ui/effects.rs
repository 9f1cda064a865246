//! Heading animation curves.
//!
//! Each animation class maps to a [`HeadingEffect`]; given the progress of the
//! running animation (`0.0..=1.0`) an [`EffectFrame`] says where and how
//! visible the heading is on that frame.

use std::f32::consts::{PI, TAU};

use ratatui::layout::Rect;

use crate::core::palette::AnimationKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingEffect {
    Bounce,
    Shake,
    Fade,
}

impl HeadingEffect {
    pub fn from_class(class: &str) -> Option<Self> {
        AnimationKey::from_class_name(class).map(|key| match key {
            AnimationKey::Bounce => HeadingEffect::Bounce,
            AnimationKey::Shake => HeadingEffect::Shake,
            AnimationKey::Fade => HeadingEffect::Fade,
        })
    }
}

/// Offset and opacity of the heading on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectFrame {
    pub dx: i32,
    pub dy: i32,
    /// 0.0 is invisible (background color), 1.0 is the full heading color.
    pub opacity: f32,
}

impl EffectFrame {
    pub const REST: EffectFrame = EffectFrame {
        dx: 0,
        dy: 0,
        opacity: 1.0,
    };
}

#[must_use]
pub fn effect_frame(effect: HeadingEffect, progress: f32) -> EffectFrame {
    let t = progress.clamp(0.0, 1.0);
    match effect {
        HeadingEffect::Bounce => {
            let bounces = 3.0;
            let amplitude = 2.0;
            let decay = 1.0 - t;
            let height = (f32::sin(t * PI * bounces).abs() * amplitude * decay).round() as i32;
            EffectFrame {
                dy: -height,
                ..EffectFrame::REST
            }
        }
        HeadingEffect::Shake => {
            let oscillations = 4.0;
            let amplitude = 3.0;
            let decay = 1.0 - t;
            let offset = (f32::sin(t * TAU * oscillations) * amplitude * decay).round() as i32;
            EffectFrame {
                dx: offset,
                ..EffectFrame::REST
            }
        }
        HeadingEffect::Fade => EffectFrame {
            opacity: ease_out_cubic(t),
            ..EffectFrame::REST
        },
    }
}

/// Shift `base` by the frame offset, keeping it inside `viewport`.
#[must_use]
pub fn offset_rect(base: Rect, frame: EffectFrame, viewport: Rect) -> Rect {
    let clamp_axis = |origin: u16, len: u16, delta: i32, lo: u16, span: u16| -> u16 {
        let lo = i32::from(lo);
        let hi = (lo + i32::from(span) - i32::from(len)).max(lo);
        (i32::from(origin) + delta).clamp(lo, hi) as u16
    };
    Rect {
        x: clamp_axis(base.x, base.width, frame.dx, viewport.x, viewport.width),
        y: clamp_axis(base.y, base.height, frame.dy, viewport.y, viewport.height),
        ..base
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
