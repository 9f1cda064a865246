//! Headless run of the controller against a recording surface.

use std::time::Instant;

use tracing::info;

use crate::core::config::data::Config;
use crate::core::controller::SelectionController;
use crate::core::selection::OptionList;
use crate::core::surface::RecordingSurface;

/// Pick `color` and `animation` (either may be absent), apply, and return the
/// commands the controller issued, one per line. Commands from the initial
/// surface reset are not part of the transcript.
pub fn script_transcript(
    config: &Config,
    color: Option<&str>,
    animation: Option<&str>,
    finish: bool,
) -> String {
    let mut controller = SelectionController::new(
        RecordingSurface::new(),
        config.palette(),
        config.feedback_duration(),
    );
    controller.surface_mut().take_commands();

    if let Some(id) = color {
        controller.select_option(OptionList::Color, id);
    }
    if let Some(id) = animation {
        controller.select_option(OptionList::Animation, id);
    }
    let applied = controller.apply_at(Instant::now());

    let fired = if finish {
        controller.surface_mut().finish_animation()
    } else {
        0
    };
    info!(applied, fired, "scripted apply finished");

    let mut transcript = String::new();
    for command in controller.surface().commands() {
        transcript.push_str(&command.to_string());
        transcript.push('\n');
    }
    transcript
}

pub fn run_script(config: &Config, color: Option<&str>, animation: Option<&str>, finish: bool) {
    print!("{}", script_transcript(config, color, animation, finish));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(transcript: &str) -> Vec<&str> {
        transcript.lines().collect()
    }

    #[test]
    fn blue_shake_with_finish() {
        let transcript = script_transcript(&Config::default(), Some("blue"), Some("shake"), true);
        assert_eq!(
            lines(&transcript),
            vec![
                "clear-highlights color",
                "highlight color blue",
                "clear-highlights animation",
                "highlight animation shake",
                "set-color #2a71d0",
                "remove-class animate-bounce",
                "remove-class animate-shake",
                "remove-class animate-fade",
                "add-class animate-shake",
                "await-animation-end",
                "remove-class animate-shake",
            ]
        );
    }

    #[test]
    fn nothing_picked_prints_the_prompt() {
        let transcript = script_transcript(&Config::default(), None, None, true);
        assert_eq!(
            lines(&transcript),
            vec!["feedback \"Please select a color or animation\""]
        );
    }

    #[test]
    fn huge_feedback_duration_from_a_config_file_still_prompts() {
        let config: Config =
            toml::from_str("feedback_seconds = 9223372036854775807").expect("parse config");
        let transcript = script_transcript(&config, None, None, false);
        assert_eq!(
            lines(&transcript),
            vec!["feedback \"Please select a color or animation\""]
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let transcript = script_transcript(&Config::default(), Some("purple"), None, false);
        assert_eq!(
            lines(&transcript),
            vec!["feedback \"Please select a color or animation\""]
        );
    }

    #[test]
    fn overrides_change_the_applied_color() {
        let mut config = Config::default();
        config.set_color_override("red", "#ff0000".to_string());
        let transcript = script_transcript(&config, Some("red"), None, false);
        assert!(transcript.contains("set-color #ff0000\n"));
        assert!(!transcript.contains("await-animation-end"));
    }
}
