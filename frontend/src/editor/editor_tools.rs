use std::rc::Rc;

use dominator::{Dom, events, html};
use wasm_bindgen_futures::spawn_local;

use crate::constants::{ID_CONTENT, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::state::App;
use crate::utils::{drop_element, exec_command, exec_command_full, get_element_by_id, get_element_from_node, get_html_element, get_selection, node_parent, query_selector, to_html};

fn css_class(label: &str) -> String {
    format!("editor-tools__{label}")
}

pub fn editor_tools(app: Rc<App>) -> Dom {
    let buttons = vec![
        button("bold", "B", handle_bold),
        button("italic", "I", handle_italic),
        button("underline", "U", handle_underline),
        button("code", "</>", handle_code),
        html!(TAG_SPAN, {.class(css_class("space"))}),
        button_app("link", "link", app.clone(), handle_link),
        button("remove link", "unlink", handle_unlink),
        button_app("image", "img", app.clone(), handle_image),
        button("quote", "❝", handle_blockquote),
        html!(TAG_SPAN, {.class(css_class("space"))}),
        button("ordered list", "1.", handle_ordered),
        button("bullet list", "•", handle_unordered),
        html!(TAG_SPAN, {.class(css_class("space"))}),
        button("heading", "H1", handle_heading_1),
        button("subheading", "H3", handle_heading_3),
        button("minor heading", "H4", handle_heading_4),
        button("paragraph", "P", handle_paragraph),
        button("clear formatting", "clean", handle_eraser),
    ];

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children(buttons)
    })
}

fn handle_eraser() {
    exec_command("removeFormat");
    exec_command_full("formatBlock", false, "p");
}

fn handle_bold() {
    exec_command("bold");
}

fn handle_italic() {
    exec_command("italic");
}

fn handle_underline() {
    exec_command("underline");
}

fn handle_code() {
    let text = get_selection().and_then(|s| s.to_string().as_string()).unwrap_or_default();
    if !text.is_empty() {
        exec_command_full("insertHTML", false, &format!("<code>{}</code>", to_html(&text)));
    }
}

fn handle_paragraph() {
    exec_command_full("formatBlock", false, "p");
}

fn handle_heading_1() {
    exec_command_full("formatBlock", false, "h1");
}

fn handle_heading_3() {
    exec_command_full("formatBlock", false, "h3");
}

fn handle_heading_4() {
    exec_command_full("formatBlock", false, "h4");
}

fn handle_blockquote() {
    exec_command_full("formatBlock", false, "blockquote");
}

fn handle_unordered() {
    exec_command("insertUnorderedList");
}

fn handle_ordered() {
    exec_command("insertOrderedList");
}

fn handle_unlink() {
    exec_command("unlink");
}

fn handle_link(app: &Rc<App>) {
    let editor = &app.editor;
    let mut flag = false;
    editor.link.set_neq("https://".to_string());
    *editor.link_element.borrow_mut() = None;

    if let Some(selection) = get_selection() {
        if selection.range_count() > 0 {
            if let Some(node) = selection.anchor_node() {
                if let Some(element) = get_element_from_node(node_parent(node, "a")) {
                    if let Some(text) = element.get_attribute("href") {
                        editor.link.set_neq(text);
                        *editor.link_element.borrow_mut() = Some(element);
                        flag = true;
                    }
                }
            }
        }
    }

    let title = if flag { "Link properties" } else { "Create link" };
    let app_result = app.clone();
    app.dialogs.prompt(title, &editor.link.get_cloned(), move |link| dlg_link_result(&app_result, link), || {});
}

fn dlg_link_result(app: &Rc<App>, link: String) {
    match app.editor.link_element.borrow_mut().take() {
        Some(element) => {
            if link.is_empty() {
                drop_element(element);
            } else if element.set_attribute("href", &link).is_ok() {}
        }
        None => {
            if !link.is_empty() {
                // selection comes back once the dialog is gone
                spawn_local(async move {
                    exec_command_full("createLink", false, &link);
                    after_link_created();
                });
            }
        }
    }
}

fn after_link_created() {
    while let Some(elem) = query_selector("[_moz_dirty]") {
        if elem.remove_attribute("_moz_dirty").is_err() {
            break;
        }
    }
}

fn handle_image(app: &Rc<App>) {
    app.dialogs.prompt("Image Link:", "", |url| {
        if !url.is_empty() {
            spawn_local(async move {
                return_focus();
                exec_command_full("insertImage", false, &url);
            });
        }
    }, || {});
}

fn return_focus() {
    if let Some(element) = get_html_element(get_element_by_id(ID_CONTENT)) {
        if element.focus().is_ok() {}
    }
}

fn button(title: &str, label: &str, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_TITLE, title)
        .text(label)
        .event(move |_: events::Click| {
            return_focus();
            click();
        })
    })
}

fn button_app(title: &str, label: &str, app: Rc<App>, click: fn(&Rc<App>)) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_TITLE, title)
        .text(label)
        .event(move |_: events::Click| {
            return_focus();
            click(&app);
        })
    })
}
