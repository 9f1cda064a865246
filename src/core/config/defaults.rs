use crate::core::config::data::Config;

impl Config {
    pub fn color_override(&self, key: &str) -> Option<&String> {
        self.colors.get(&key.to_lowercase())
    }

    pub fn set_color_override(&mut self, key: &str, value: String) {
        let normalized = key.to_lowercase();
        if normalized != key {
            self.colors.remove(key);
        }
        self.colors.insert(normalized, value);
    }

    /// Returns whether an override was present.
    pub fn unset_color_override(&mut self, key: &str) -> bool {
        let normalized = key.to_lowercase();
        let removed = self.colors.remove(&normalized).is_some();
        if normalized != key {
            return self.colors.remove(key).is_some() || removed;
        }
        removed
    }
}
