use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use web_sys::Range;

use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::utils::{get_input_value, get_selection};

const PROMPT_FIELD: &str = "dialog-prompt";

#[derive(Clone)]
pub struct Dialog {
    pub id: usize,
    pub type_: DialogType,
    pub title: String,
    pub message: String,
    pub form: Rc<dyn Fn() -> Dom>,
    pub confirm: Rc<dyn Fn()>,
    pub cancel: Rc<dyn Fn()>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum DialogType {
    Alert,
    Form,
}

/// Stack of open dialogs; only the top one is shown.
pub struct Dialogs {
    list: MutableVec<Dialog>,
    next_id: Cell<usize>,
    range_saved: RefCell<Option<Range>>,
}

impl Dialogs {
    pub fn new() -> Self {
        Self {
            list: MutableVec::new(),
            next_id: Cell::new(0),
            range_saved: RefCell::new(None),
        }
    }

    pub fn alert(&self, message: &str) {
        self.open(DialogType::Alert, "", message, Rc::new(|| html!(TAG_DIV)), Rc::new(|| {}), Rc::new(|| {}));
    }

    pub fn form(&self, title: &str, form: impl Fn() -> Dom + 'static, confirm: impl Fn() + 'static, cancel: impl Fn() + 'static) {
        self.open(DialogType::Form, title, "", Rc::new(form), Rc::new(confirm), Rc::new(cancel));
    }

    /// Single-line text question; `confirm` receives the trimmed answer.
    pub fn prompt(&self, title: &str, value: &str, confirm: impl Fn(String) + 'static, cancel: impl Fn() + 'static) {
        let value = value.to_string();
        let form = move || html!(TAG_INPUT, {
            .class(css_class("input"))
            .attr(PROP_TITLE, "")
            .attr(PROP_PLACEHOLDER, "")
            .attr(PROP_TYPE, "text")
            .attr(PROP_NAME, PROMPT_FIELD)
            .attr(PROP_VALUE, &value)
        });
        let confirm = move || confirm(get_input_value(PROMPT_FIELD).trim().to_string());
        self.form(title, form, confirm, cancel);
    }

    fn open(&self, type_: DialogType, title: &str, message: &str, form: Rc<dyn Fn() -> Dom>, confirm: Rc<dyn Fn()>, cancel: Rc<dyn Fn()>) {
        self.save_range();
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.list.lock_mut().push_cloned(Dialog {
            id,
            type_,
            title: title.to_string(),
            message: message.to_string(),
            form,
            confirm,
            cancel,
        });
    }

    fn close(&self, id: usize) {
        let mut list = self.list.lock_mut();
        if let Some(ind) = list.iter().position(|dialog| dialog.id == id) {
            list.remove(ind);
        }
        let is_empty = list.is_empty();
        drop(list);
        if is_empty {
            self.restore_range();
        }
    }

    fn save_range(&self) {
        if !self.list.lock_ref().is_empty() {
            return;
        }
        if let Some(selection) = get_selection() {
            if selection.range_count() > 0 {
                if let Ok(current) = selection.get_range_at(0) {
                    *self.range_saved.borrow_mut() = Some(current);
                }
            }
        }
    }

    fn restore_range(&self) {
        if let Some(selection) = get_selection() {
            if selection.remove_all_ranges().is_ok() {
                if let Some(saved) = self.range_saved.borrow().as_ref() {
                    if selection.add_range(saved).is_ok() {}
                }
            }
        }
    }
}

// ===

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

pub fn dialogs(state: Rc<Dialogs>) -> impl Signal<Item=Option<Dom>> {
    state.list.signal_vec_cloned().to_signal_cloned().map(move |list| current_element(&state, list))
}

fn current_element(state: &Rc<Dialogs>, list: Vec<Dialog>) -> Option<Dom> {
    list.last().map(|dialog| match dialog.type_ {
        DialogType::Alert => dialog_alert(state, dialog),
        DialogType::Form => dialog_form(state, dialog),
    })
}

fn dialog_common(rows: Vec<Dom>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .children(rows)
        }))
    })
}

fn dialog_alert(state: &Rc<Dialogs>, data: &Dialog) -> Dom {
    let state = state.clone();
    let id = data.id;
    dialog_common(vec![
        html!(TAG_DIV, {
            .class(css_class("header"))
        }),
        html!(TAG_DIV, {
            .class(css_class("body"))
            .text(&data.message)
        }),
        html!(TAG_DIV, {
            .class(css_class("footer"))
            .children([
                html!(TAG_BUTTON, {
                    .text("Ok")
                    .attr("aria-label", "confirm")
                    .event(move |_: events::Click| {
                        state.close(id);
                    })
                }),
            ])
        }),
    ])
}

fn dialog_form(state: &Rc<Dialogs>, data: &Dialog) -> Dom {
    dialog_common(vec![
        html!(TAG_DIV, {
            .class(css_class("header"))
            .text(&data.title)
        }),
        html!(TAG_DIV, {
            .class(css_class("body"))
            .child((data.form)())
        }),
        dialog_footer(state, data),
    ])
}

fn dialog_footer(state: &Rc<Dialogs>, data: &Dialog) -> Dom {
    let id = data.id;
    let confirm = data.confirm.clone();
    let cancel = data.cancel.clone();
    let state_confirm = state.clone();
    let state_cancel = state.clone();

    html!(TAG_DIV, {
        .class(css_class("footer"))
        .children([
            html!(TAG_BUTTON, {
                .text("Ok")
                .attr("aria-label", "confirm")
                .event(move |_: events::Click| {
                    confirm();
                    state_confirm.close(id);
                })
            }),
            html!(TAG_BUTTON, {
                .text("Cancel")
                .attr("aria-label", "cancel")
                .event(move |_: events::Click| {
                    cancel();
                    state_cancel.close(id);
                })
            }),
        ])
    })
}
