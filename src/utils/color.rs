//! Fitting palette colors to what the terminal can display.

use ratatui::style::Color;

use crate::core::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Truecolor,
    X256,
    X16,
}

impl ColorDepth {
    /// Depth named by a `MARQUEE_COLOR` value, if it names one.
    fn from_override(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "24-bit" => Some(ColorDepth::Truecolor),
            "256" | "x256" | "256color" => Some(ColorDepth::X256),
            "16" | "ansi" | "x16" => Some(ColorDepth::X16),
            _ => None,
        }
    }
}

/// Detect the terminal color depth from the environment.
///
/// `MARQUEE_COLOR` wins, then `COLORTERM`, then a `*256color` `TERM`.
/// Anything else gets 16 colors.
pub fn detect_color_depth() -> ColorDepth {
    depth_from_env(
        std::env::var("MARQUEE_COLOR").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn depth_from_env(forced: Option<&str>, colorterm: Option<&str>, term: Option<&str>) -> ColorDepth {
    if let Some(depth) = forced.and_then(ColorDepth::from_override) {
        return depth;
    }
    let colorterm = colorterm.unwrap_or_default().to_ascii_lowercase();
    if ["truecolor", "24bit", "24-bit"]
        .iter()
        .any(|tag| colorterm.contains(tag))
    {
        return ColorDepth::Truecolor;
    }
    if term
        .unwrap_or_default()
        .to_ascii_lowercase()
        .contains("256color")
    {
        return ColorDepth::X256;
    }
    ColorDepth::X16
}

/// Terminal color for a palette value at the given depth.
pub fn terminal_color(rgb: Rgb, depth: ColorDepth) -> Color {
    match depth {
        ColorDepth::Truecolor => Color::Rgb(rgb.r, rgb.g, rgb.b),
        ColorDepth::X256 => Color::Indexed(nearest_indexed(rgb)),
        ColorDepth::X16 => nearest_ansi(rgb),
    }
}

/// Approximate xterm values of the 16 named colors.
const ANSI: [(Rgb, Color); 16] = [
    (Rgb::new(0, 0, 0), Color::Black),
    (Rgb::new(205, 0, 0), Color::Red),
    (Rgb::new(0, 205, 0), Color::Green),
    (Rgb::new(205, 205, 0), Color::Yellow),
    (Rgb::new(0, 0, 238), Color::Blue),
    (Rgb::new(205, 0, 205), Color::Magenta),
    (Rgb::new(0, 205, 205), Color::Cyan),
    (Rgb::new(229, 229, 229), Color::Gray),
    (Rgb::new(127, 127, 127), Color::DarkGray),
    (Rgb::new(255, 0, 0), Color::LightRed),
    (Rgb::new(0, 255, 0), Color::LightGreen),
    (Rgb::new(255, 255, 0), Color::LightYellow),
    (Rgb::new(92, 92, 255), Color::LightBlue),
    (Rgb::new(255, 0, 255), Color::LightMagenta),
    (Rgb::new(0, 255, 255), Color::LightCyan),
    (Rgb::new(255, 255, 255), Color::White),
];

fn nearest_ansi(rgb: Rgb) -> Color {
    ANSI.iter()
        .min_by_key(|(candidate, _)| rgb.distance_sq(*candidate))
        .map_or(Color::Reset, |(_, color)| *color)
}

/// Channel levels of the 6x6x6 cube at indexes 16..=231.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn nearest_level(channel: u8) -> u8 {
    let mut best = 0;
    for (step, level) in CUBE_LEVELS.iter().enumerate() {
        if channel.abs_diff(*level) < channel.abs_diff(CUBE_LEVELS[best]) {
            best = step;
        }
    }
    best as u8
}

/// Nearest xterm-256 index, picking between the color cube and the gray ramp
/// (indexes 232..=255, `8 + 10 * step`).
fn nearest_indexed(rgb: Rgb) -> u8 {
    let (ri, gi, bi) = (nearest_level(rgb.r), nearest_level(rgb.g), nearest_level(rgb.b));
    let cube = Rgb::new(
        CUBE_LEVELS[ri as usize],
        CUBE_LEVELS[gi as usize],
        CUBE_LEVELS[bi as usize],
    );
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let average = (u16::from(rgb.r) + u16::from(rgb.g) + u16::from(rgb.b)) / 3;
    let gray_step = (average.saturating_sub(3) / 10).min(23) as u8;
    let gray_value = 8 + 10 * gray_step;
    let gray = Rgb::new(gray_value, gray_value, gray_value);

    if rgb.distance_sq(gray) < rgb.distance_sq(cube) {
        232 + gray_step
    } else {
        cube_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::{ColorKey, DEFAULT_COLOR};

    #[test]
    fn environment_precedence() {
        assert_eq!(
            depth_from_env(Some("16"), Some("truecolor"), None),
            ColorDepth::X16
        );
        assert_eq!(
            depth_from_env(Some("bogus"), Some("24bit"), None),
            ColorDepth::Truecolor
        );
        assert_eq!(
            depth_from_env(None, None, Some("xterm-256color")),
            ColorDepth::X256
        );
        assert_eq!(depth_from_env(None, None, Some("xterm")), ColorDepth::X16);
        assert_eq!(depth_from_env(None, None, None), ColorDepth::X16);
    }

    #[test]
    fn truecolor_keeps_the_exact_value() {
        let rgb = ColorKey::Blue.builtin_value();
        assert_eq!(
            terminal_color(rgb, ColorDepth::Truecolor),
            Color::Rgb(0x2a, 0x71, 0xd0)
        );
    }

    #[test]
    fn cube_corners_map_to_their_own_index() {
        assert_eq!(
            terminal_color(Rgb::new(255, 0, 0), ColorDepth::X256),
            Color::Indexed(196)
        );
        assert_eq!(
            terminal_color(Rgb::new(0, 0, 255), ColorDepth::X256),
            Color::Indexed(21)
        );
    }

    #[test]
    fn grays_use_the_gray_ramp() {
        // 0x50 is two away from ramp step 7 (78) and far from cube level 95.
        assert_eq!(
            terminal_color(DEFAULT_COLOR, ColorDepth::X256),
            Color::Indexed(239)
        );
    }

    #[test]
    fn palette_colors_land_on_matching_ansi_names() {
        assert!(matches!(
            terminal_color(ColorKey::Blue.builtin_value(), ColorDepth::X16),
            Color::Blue | Color::LightBlue
        ));
        assert!(matches!(
            terminal_color(ColorKey::Red.builtin_value(), ColorDepth::X16),
            Color::Red | Color::LightRed
        ));
        assert!(matches!(
            terminal_color(ColorKey::Green.builtin_value(), ColorDepth::X16),
            Color::Green | Color::LightGreen
        ));
    }
}
