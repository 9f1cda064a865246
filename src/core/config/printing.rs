use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset, dark)"),
        }
        match &self.default_color {
            Some(color) => println!("  default-color: {color}"),
            None => println!("  default-color: (unset)"),
        }
        println!(
            "  feedback-seconds: {}",
            self.feedback_duration().as_secs()
        );
        println!(
            "  animation-millis: {}",
            self.animation_duration().as_millis()
        );
        if self.colors.is_empty() {
            println!("  colors: (no overrides)");
        } else {
            println!("  colors:");
            for (key, value) in &self.colors {
                println!("    {key}: {value}");
            }
        }
    }
}
