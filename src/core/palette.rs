//! Static option tables for the heading: which colors and animations can be
//! picked, and what each key maps to.
//!
//! The tables are configuration, not state. A [`Palette`] starts from the
//! built-in values and may carry user overrides loaded from `config.toml`.

use std::fmt;

use tracing::warn;

/// Sentinel carried by the "none" option of every list.
pub const NONE_KEY: &str = "none";

/// Heading color used whenever no color is chosen.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x50, 0x50, 0x50);

/// Every class name an animation key can map to.
pub const ANIMATION_CLASSES: [&str; 3] = ["animate-bounce", "animate-shake", "animate-fade"];

/// A 24-bit color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive, surrounding whitespace ignored).
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2) as u32;
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }

    /// Linear blend toward `other`; `t` is clamped to `0.0..=1.0`.
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A key that can appear in an option list.
pub trait OptionKey: Copy + Eq + fmt::Debug + 'static {
    /// Every key in display order.
    const ALL: &'static [Self];

    /// Declarative identifier carried by the option element.
    fn id(self) -> &'static str;

    /// Human-facing label.
    fn label(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.id().eq_ignore_ascii_case(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Blue,
    Red,
    Green,
}

impl ColorKey {
    pub fn builtin_value(self) -> Rgb {
        match self {
            ColorKey::Blue => Rgb::new(0x2a, 0x71, 0xd0),
            ColorKey::Red => Rgb::new(0xd0, 0x2a, 0x2a),
            ColorKey::Green => Rgb::new(0x2a, 0xd0, 0x2a),
        }
    }

    fn index(self) -> usize {
        match self {
            ColorKey::Blue => 0,
            ColorKey::Red => 1,
            ColorKey::Green => 2,
        }
    }
}

impl OptionKey for ColorKey {
    const ALL: &'static [Self] = &[ColorKey::Blue, ColorKey::Red, ColorKey::Green];

    fn id(self) -> &'static str {
        match self {
            ColorKey::Blue => "blue",
            ColorKey::Red => "red",
            ColorKey::Green => "green",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ColorKey::Blue => "Blue",
            ColorKey::Red => "Red",
            ColorKey::Green => "Green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    Bounce,
    Shake,
    Fade,
}

impl AnimationKey {
    pub fn class_name(self) -> &'static str {
        match self {
            AnimationKey::Bounce => ANIMATION_CLASSES[0],
            AnimationKey::Shake => ANIMATION_CLASSES[1],
            AnimationKey::Fade => ANIMATION_CLASSES[2],
        }
    }

    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.class_name() == class)
    }
}

impl OptionKey for AnimationKey {
    const ALL: &'static [Self] = &[AnimationKey::Bounce, AnimationKey::Shake, AnimationKey::Fade];

    fn id(self) -> &'static str {
        match self {
            AnimationKey::Bounce => "bounce",
            AnimationKey::Shake => "shake",
            AnimationKey::Fade => "fade",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AnimationKey::Bounce => "Bounce",
            AnimationKey::Shake => "Shake",
            AnimationKey::Fade => "Fade",
        }
    }
}

/// Color values for every [`ColorKey`] plus the default heading color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 3],
    default_color: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Palette {
    pub fn builtin() -> Self {
        Self {
            colors: [
                ColorKey::Blue.builtin_value(),
                ColorKey::Red.builtin_value(),
                ColorKey::Green.builtin_value(),
            ],
            default_color: DEFAULT_COLOR,
        }
    }

    /// Built-in palette with user overrides applied.
    ///
    /// Overrides naming an unknown key or carrying an unparseable hex value are
    /// skipped with a warning.
    pub fn with_overrides<'a, I>(overrides: I, default_color: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut palette = Self::builtin();

        for (key, value) in overrides {
            let Some(color_key) = ColorKey::from_id(key) else {
                warn!(key, "ignoring override for unknown color key");
                continue;
            };
            match Rgb::parse_hex(value) {
                Some(rgb) => palette.colors[color_key.index()] = rgb,
                None => warn!(key, value, "ignoring color override with invalid hex value"),
            }
        }

        if let Some(raw) = default_color {
            match Rgb::parse_hex(raw) {
                Some(rgb) => palette.default_color = rgb,
                None => warn!(value = raw, "ignoring invalid default color"),
            }
        }

        palette
    }

    pub fn color(&self, key: ColorKey) -> Rgb {
        self.colors[key.index()]
    }

    pub fn default_color(&self) -> Rgb {
        self.default_color
    }
}
