use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use shared::error::ApiError;

use crate::constants::{MSG_ERROR, PROP_DISABLED, PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::state::App;
use crate::utils::{copy_to_clipboard, get_input_value, set_title};

const KEY_ENTER: &str = "Enter";
const FIELD_TOKEN: &str = "input-token";

fn css_class(label: &str) -> String {
    format!("app-auth__{label}")
}

pub fn app_auth(app: Rc<App>) -> Dom {
    set_title("Authorization");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("form"))
            .children([
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr("id", FIELD_TOKEN)
                    .attr(PROP_TITLE, "Access token")
                    .attr(PROP_PLACEHOLDER, "Access token")
                    .attr(PROP_TYPE, "password")
                    .attr(PROP_NAME, FIELD_TOKEN)
                    .event({
                        let app = app.clone();
                        move |ev: events::KeyDown| {
                            if ev.key() == KEY_ENTER {
                                authorize(&app);
                            }
                        }
                    })
                }),
                html!(TAG_BUTTON, {
                    .attr("id", "auth-token")
                    .class(css_class("button"))
                    .text("Authorize")
                    .prop_signal(PROP_DISABLED, app.auth_busy.signal())
                    .event({
                        let app = app.clone();
                        move |_: events::Click| authorize(&app)
                    })
                }),
                html!(TAG_BUTTON, {
                    .attr("id", "copy-token")
                    .class(css_class("button"))
                    .text("Copy my token")
                    .event({
                        let app = app.clone();
                        move |_: events::Click| copy_token(&app)
                    })
                }),
                html!(TAG_DIV, {
                    .class(css_class("message"))
                    .text_signal(app.auth_busy.signal().map(|busy| if busy { "..." } else { "" }))
                }),
            ])
        }))
    })
}

fn authorize(app: &Rc<App>) {
    if app.auth_busy.get() {
        return;
    }
    app.auth_busy.set(true);
    let token = get_input_value(FIELD_TOKEN);
    let app = app.clone();
    spawn_local(async move {
        let result = app.session.authorize_token(&token).await;
        app.auth_busy.set(false);
        match result {
            Ok(_) => app.dialogs.alert("Auth Successfully!"),
            Err(ApiError::InvalidToken) => app.dialogs.alert("Bad Token"),
            Err(err) => {
                log::error!("authorize: {err}");
                app.dialogs.alert(MSG_ERROR);
            }
        }
    });
}

fn copy_token(app: &Rc<App>) {
    match app.session.stored_token() {
        Some(token) => {
            if !copy_to_clipboard(&token) {
                log::warn!("copy_token: clipboard refused");
            }
        }
        None => log::info!("copy_token: no token stored"),
    }
}
