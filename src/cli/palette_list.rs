use crate::core::config::data::Config;
use crate::core::palette::{AnimationKey, ColorKey, OptionKey, NONE_KEY};

pub fn list_palette(config: &Config) {
    let palette = config.palette();

    println!("Colors:");
    for key in ColorKey::ALL {
        let mark = if config.color_override(key.id()).is_some() {
            "*"
        } else {
            " "
        };
        println!("  {} {:<6} {}", mark, key.id(), palette.color(*key));
    }
    println!("    {:<6} {}", NONE_KEY, palette.default_color());

    println!("\nAnimations:");
    for key in AnimationKey::ALL {
        println!("    {:<6} {}", key.id(), key.class_name());
    }
    println!("    {NONE_KEY}");

    println!("\nDefault color: {}", palette.default_color());
    if !config.colors.is_empty() {
        println!("(* overridden in config)");
    }
}
