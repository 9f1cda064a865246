use ratatui::style::{Color, Modifier, Style};

use crate::core::palette::Rgb;
use crate::utils::color::{terminal_color, ColorDepth};

/// Names accepted by [`Theme::from_name`] and `marquee set theme`.
pub const THEME_NAMES: &[&str] = &["dark", "light"];

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Same background as an RGB value, used when fading the heading
    pub background_rgb: Rgb,

    // Chrome
    pub title_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub help_style: Style,

    // Option lists and buttons
    pub option_style: Style,
    pub selected_option_style: Style,
    pub cursor_style: Style,
    pub button_style: Style,

    pub feedback_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        let background = Rgb::new(0x1e, 0x1e, 0x1e);
        Theme {
            background_color: Color::Rgb(background.r, background.g, background.b),
            background_rgb: background,

            title_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(Color::Gray),
            help_style: Style::default().fg(Color::DarkGray),

            option_style: Style::default().fg(Color::White),
            selected_option_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            button_style: Style::default().fg(Color::Cyan),

            feedback_style: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::ITALIC),
        }
    }

    pub fn light() -> Self {
        let background = Rgb::new(0xfa, 0xfa, 0xfa);
        Theme {
            background_color: Color::Rgb(background.r, background.g, background.b),
            background_rgb: background,

            title_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
            focused_border_style: Style::default().fg(Color::Black),
            help_style: Style::default().fg(Color::Gray),

            option_style: Style::default().fg(Color::Black),
            selected_option_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            button_style: Style::default().fg(Color::Blue),

            feedback_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        }
    }

    pub fn is_known(name: &str) -> bool {
        THEME_NAMES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name.trim()))
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            // Fallback
            _ => Self::dark_default(),
        }
    }

    /// Fit the background to the terminal. The other slots use named colors,
    /// which every depth can show.
    pub fn quantized(mut self, depth: ColorDepth) -> Self {
        self.background_color = terminal_color(self.background_rgb, depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_dark() {
        assert!(!Theme::is_known("dracula"));
        assert_eq!(
            Theme::from_name("dracula").background_rgb,
            Theme::dark_default().background_rgb
        );
        assert!(Theme::is_known(" Light "));
        assert_eq!(
            Theme::from_name("LIGHT").background_rgb,
            Theme::light().background_rgb
        );
    }

    #[test]
    fn quantizing_for_16_colors_drops_rgb() {
        let theme = Theme::dark_default().quantized(ColorDepth::X16);
        assert!(!matches!(theme.background_color, Color::Rgb(..)));
        assert_eq!(theme.background_color, Color::Black);

        let theme = Theme::light().quantized(ColorDepth::X256);
        assert_eq!(theme.background_color, Color::Indexed(231));
    }
}
