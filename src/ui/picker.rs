use crate::core::palette::{AnimationKey, ColorKey, OptionKey, NONE_KEY};
use crate::core::selection::OptionList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Keyboard cursor over one option list. The cursor only says where Enter
/// would pick; which option is *selected* is tracked by the surface highlights.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub list: OptionList,
    pub items: Vec<PickerItem>,
    pub cursor: usize,
}

impl PickerState {
    pub fn new(list: OptionList) -> Self {
        let mut items = vec![PickerItem {
            id: NONE_KEY,
            label: "None",
        }];
        match list {
            OptionList::Color => items.extend(ColorKey::ALL.iter().map(|key| PickerItem {
                id: key.id(),
                label: key.label(),
            })),
            OptionList::Animation => {
                items.extend(AnimationKey::ALL.iter().map(|key| PickerItem {
                    id: key.id(),
                    label: key.label(),
                }))
            }
        }
        Self {
            list,
            items,
            cursor: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        self.list.title()
    }

    pub fn cursor_id(&self) -> Option<&'static str> {
        self.items.get(self.cursor).map(|item| item.id)
    }

    pub fn move_prev(&mut self) {
        if !self.items.is_empty() {
            if self.cursor == 0 {
                self.cursor = self.items.len() - 1;
            } else {
                self.cursor -= 1;
            }
        }
    }

    pub fn move_next(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
        }
    }

    /// Put the cursor on `id` if the list has it.
    pub fn focus_id(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.cursor = index;
        }
    }
}
