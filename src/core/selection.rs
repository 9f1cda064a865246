use std::fmt;

use crate::core::palette::{AnimationKey, ColorKey, OptionKey, NONE_KEY};

/// The two mutually independent option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionList {
    Color,
    Animation,
}

impl OptionList {
    pub const ALL: [OptionList; 2] = [OptionList::Color, OptionList::Animation];

    pub fn title(self) -> &'static str {
        match self {
            OptionList::Color => "Colors",
            OptionList::Animation => "Animations",
        }
    }

    /// Option ids in display order, starting with the "none" sentinel.
    pub fn option_ids(self) -> Vec<&'static str> {
        let mut ids = vec![NONE_KEY];
        match self {
            OptionList::Color => ids.extend(ColorKey::ALL.iter().map(|key| key.id())),
            OptionList::Animation => ids.extend(AnimationKey::ALL.iter().map(|key| key.id())),
        }
        ids
    }
}

impl fmt::Display for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionList::Color => f.write_str("color"),
            OptionList::Animation => f.write_str("animation"),
        }
    }
}

/// Per-list choice. "Never chosen" and "explicitly chose none" stay distinct
/// because apply treats them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<K> {
    Unset,
    None,
    Key(K),
}

impl<K> Default for Choice<K> {
    fn default() -> Self {
        Choice::Unset
    }
}

impl<K: OptionKey> Choice<K> {
    /// Resolve the declarative id carried by an option. Returns `None` for ids
    /// outside the list, which callers treat as an ignored pick.
    pub fn parse(id: &str) -> Option<Self> {
        if id.trim().eq_ignore_ascii_case(NONE_KEY) {
            return Some(Choice::None);
        }
        K::from_id(id).map(Choice::Key)
    }

    pub fn key(self) -> Option<K> {
        match self {
            Choice::Key(key) => Some(key),
            Choice::Unset | Choice::None => None,
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Choice::Unset)
    }

    /// Id of the option that should carry the highlight, if any.
    pub fn option_id(self) -> Option<&'static str> {
        match self {
            Choice::Unset => None,
            Choice::None => Some(NONE_KEY),
            Choice::Key(key) => Some(key.id()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub color: Choice<ColorKey>,
    pub animation: Choice<AnimationKey>,
}

impl SelectionState {
    /// True when neither list has seen a pick since start or the last reset.
    pub fn is_untouched(&self) -> bool {
        self.color.is_unset() && self.animation.is_unset()
    }

    pub fn option_id(&self, list: OptionList) -> Option<&'static str> {
        match list {
            OptionList::Color => self.color.option_id(),
            OptionList::Animation => self.animation.option_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_sentinel_is_distinct_from_unset() {
        let parsed = Choice::<ColorKey>::parse("none");
        assert_eq!(parsed, Some(Choice::None));
        assert!(!Choice::<ColorKey>::None.is_unset());
        assert!(Choice::<ColorKey>::default().is_unset());
    }

    #[test]
    fn unknown_ids_do_not_parse() {
        assert_eq!(Choice::<AnimationKey>::parse("spin"), None);
        assert_eq!(Choice::<AnimationKey>::parse(""), None);
        assert_eq!(Choice::<AnimationKey>::parse("blue"), None);
    }

    #[test]
    fn option_ids_follow_display_order() {
        assert_eq!(
            OptionList::Color.option_ids(),
            vec!["none", "blue", "red", "green"]
        );
        assert_eq!(
            OptionList::Animation.option_ids(),
            vec!["none", "bounce", "shake", "fade"]
        );
    }

    #[test]
    fn untouched_only_when_both_lists_unset() {
        let mut state = SelectionState::default();
        assert!(state.is_untouched());

        state.animation = Choice::None;
        assert!(!state.is_untouched());
        assert_eq!(state.option_id(OptionList::Animation), Some("none"));
        assert_eq!(state.option_id(OptionList::Color), None);
    }
}
