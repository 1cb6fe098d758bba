use std::rc::Rc;

use dominator::{Dom, html};

use shared::route::Route;

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::editor::app_editor::{app_editor, editor_start};
use crate::elements::app_auth::app_auth;
use crate::elements::app_pages::app_pages;
use crate::loader::pages_start;
use crate::state::App;

pub fn app_root(app: Rc<App>) -> Dom {
    let body = match &app.route {
        Route::NewPage | Route::View(_) => {
            editor_start(app.clone());
            app_editor(app.clone())
        }
        Route::Account => {
            pages_start(app.clone());
            app_pages(app.clone())
        }
        Route::Auth => app_auth(app.clone()),
    };

    html!(TAG_DIV, {
        .class("app-root")
        .child(body)
        .child_signal(dialogs(app.dialogs.clone()))
    })
}
