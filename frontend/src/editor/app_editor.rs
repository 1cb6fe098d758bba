use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::error::ApiError;
use shared::node::editor_content;
use shared::session::Saved;
use shared::types::PageForm;
use shared::utils::is_delete_confirmed;

use crate::constants::{ID_AUTHOR, ID_CONTENT, ID_LINK_INPUT, ID_LINK_INPUT_BLOCK, ID_TITLE, MSG_ERROR, PROP_DISABLED, PROP_EDITABLE, TAG_BUTTON, TAG_DIV};
use crate::editor::dom_node::WebNode;
use crate::editor::editor_tools::editor_tools;
use crate::state::App;
use crate::utils::{clear_body, get_element_by_id, get_html_element, inner_text_by_id, location_assign, text_by_id};

fn css_class(label: &str) -> String {
    format!("app-editor__{label}")
}

/// Controls for the server-rendered page template.
pub fn app_editor(app: Rc<App>) -> Dom {
    let state = &app.editor;
    let is_view = app.page_uri().is_some();

    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("buttons"))
                .children([
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .visible_signal(state.enabled.signal().map(move |enabled| is_view && !enabled))
                        .text_signal(state.edit_label.signal_cloned())
                        .prop_signal(PROP_DISABLED, state.edit_busy.signal())
                        .event({
                            let app = app.clone();
                            move |_: events::Click| prepare_editor(&app)
                        })
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .visible_signal(state.enabled.signal())
                        .text("Save")
                        .prop_signal(PROP_DISABLED, state.save_busy.signal())
                        .event({
                            let app = app.clone();
                            move |_: events::Click| handle_save(&app)
                        })
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .visible_signal(state.enabled.signal())
                        .text("Save profile")
                        .prop_signal(PROP_DISABLED, state.profile_busy.signal())
                        .event({
                            let app = app.clone();
                            move |_: events::Click| handle_save_profile(&app)
                        })
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("button"))
                        .class(css_class("delete"))
                        .visible_signal(state.can_delete.signal())
                        .text("Delete")
                        .prop_signal(PROP_DISABLED, state.delete_busy.signal())
                        .event({
                            let app = app.clone();
                            move |_: events::Click| handle_delete(&app)
                        })
                    }),
                ])
            }),
        ])
        .child_signal(state.enabled.signal().map({
            let app = app.clone();
            move |enabled| if enabled { Some(editor_tools(app.clone())) } else { None }
        }))
    })
}

pub fn editor_start(app: Rc<App>) {
    spawn_local(async move {
        let account = match app.session.ensure_account().await {
            Ok(account) => account,
            Err(err) => {
                report(&app, "editor_start", &err);
                return;
            }
        };

        match app.page_uri() {
            Some(page_uri) => {
                let page = match app.session.page_info(page_uri).await {
                    Ok(page) => page,
                    Err(err) => {
                        report(&app, "editor_start", &err);
                        return;
                    }
                };
                let state = &app.editor;
                state.edit_label.set(if page.can_edit { "Edit" } else { "Edit & Copy" }.to_string());
                state.edit_busy.set(false);
                state.can_delete.set(page.can_edit);
                app.session.record_view(&page.path).await;
            }
            None => {
                if let Some(author) = get_element_by_id(ID_AUTHOR) {
                    author.set_text_content(Some(&account.author_name));
                    author.set_attribute("href", &account.author_url).ok();
                }
                if let Some(link) = get_html_element(get_element_by_id(ID_LINK_INPUT)) {
                    let url = if account.author_url.is_empty() { "..." } else { account.author_url.as_str() };
                    link.set_inner_text(url);
                }
                prepare_editor(&app);
            }
        }
    });
}

fn prepare_editor(app: &Rc<App>) {
    for id in [ID_CONTENT, ID_TITLE, ID_AUTHOR, ID_LINK_INPUT] {
        if let Some(element) = get_element_by_id(id) {
            element.set_attribute(PROP_EDITABLE, "true").ok();
        }
    }
    if let Some(block) = get_html_element(get_element_by_id(ID_LINK_INPUT_BLOCK)) {
        block.style().set_property("display", "block").ok();
    }
    app.editor.enabled.set_neq(true);
}

fn report(app: &App, context: &str, err: &ApiError) {
    log::error!("{context}: {err}");
    app.dialogs.alert(MSG_ERROR);
}

/// Runs `task` with `busy` raised; ignored while `busy` is already set.
fn guarded<F>(busy: &Mutable<bool>, task: F)
    where F: std::future::Future<Output=()> + 'static
{
    if busy.get() {
        return;
    }
    busy.set(true);
    let busy = busy.clone();
    spawn_local(async move {
        task.await;
        busy.set(false);
    });
}

fn handle_save(app: &Rc<App>) {
    let content = match get_element_by_id(ID_CONTENT) {
        Some(root) => editor_content(&WebNode(root.into())),
        None => {
            app.dialogs.alert("Content block not found");
            return;
        }
    };
    let form = PageForm::from_editor(
        &text_by_id(ID_TITLE),
        &text_by_id(ID_AUTHOR),
        &inner_text_by_id(ID_LINK_INPUT),
        &content,
    );
    let form = match form {
        Ok(form) => form,
        Err(err) => {
            report(app, "handle_save", &err);
            return;
        }
    };

    let busy = app.editor.save_busy.clone();
    let app = app.clone();
    guarded(&busy, async move {
        match app.session.save_page(app.page_uri(), &form).await {
            Ok(Saved::Edited(_)) => app.dialogs.alert("Saved Successfully!"),
            Ok(Saved::Created(page)) => location_assign(&page.path),
            Err(err) => report(&app, "handle_save", &err),
        }
    });
}

fn handle_save_profile(app: &Rc<App>) {
    let author_name = text_by_id(ID_AUTHOR);
    let author_url = text_by_id(ID_LINK_INPUT);

    let busy = app.editor.profile_busy.clone();
    let app = app.clone();
    guarded(&busy, async move {
        match app.session.save_profile(&author_name, &author_url).await {
            Ok(_) => app.dialogs.alert("Updated Successfully!"),
            Err(err) => report(&app, "handle_save_profile", &err),
        }
    });
}

fn handle_delete(app: &Rc<App>) {
    let busy = &app.editor.delete_busy;
    if busy.get() {
        return;
    }
    busy.set(true);

    let app_confirm = app.clone();
    let app_cancel = app.clone();
    app.dialogs.prompt(r#"Enter "DELETE" (without quotes)"#, "", move |answer| {
        let app = app_confirm.clone();
        spawn_local(async move {
            if is_delete_confirmed(&answer) {
                delete_page(&app).await;
            } else {
                app.dialogs.alert("Canceled :>");
            }
            app.editor.delete_busy.set(false);
        });
    }, move || {
        let app = app_cancel.clone();
        spawn_local(async move {
            app.dialogs.alert("Canceled :>");
            app.editor.delete_busy.set(false);
        });
    });
}

async fn delete_page(app: &Rc<App>) {
    let Some(page_uri) = app.page_uri() else { return };
    match app.session.delete_page(page_uri).await {
        Ok(path) => {
            clear_body();
            location_assign(&path);
        }
        Err(err) => report(app, "delete_page", &err),
    }
}
