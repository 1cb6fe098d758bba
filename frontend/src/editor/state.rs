use std::cell::RefCell;

use futures_signals::signal::Mutable;
use web_sys::Element;

pub struct EditorState {
    pub enabled: Mutable<bool>,
    pub edit_label: Mutable<String>,
    pub edit_busy: Mutable<bool>,
    pub can_delete: Mutable<bool>,
    pub save_busy: Mutable<bool>,
    pub profile_busy: Mutable<bool>,
    pub delete_busy: Mutable<bool>,
    pub link: Mutable<String>,
    pub link_element: RefCell<Option<Element>>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            enabled: Mutable::new(false),
            edit_label: Mutable::new("Edit".to_string()),
            // until the page is known
            edit_busy: Mutable::new(true),
            can_delete: Mutable::new(false),
            save_busy: Mutable::new(false),
            profile_busy: Mutable::new(false),
            delete_busy: Mutable::new(false),
            link: Mutable::new("".to_string()),
            link_element: RefCell::new(None),
        }
    }
}
