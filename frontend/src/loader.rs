use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use shared::constants::PAGES_LIMIT;

use crate::constants::MSG_ERROR;
use crate::state::App;

/// Fetches the next batch of pages unless the account is still unknown or
/// a batch is already on its way.
pub fn load_pages(app: &Rc<App>) {
    let offset = match app.pages.lock_mut().begin_load() {
        Some(offset) => offset,
        None => return,
    };
    let app = app.clone();
    spawn_local(async move {
        match app.session.next_pages(PAGES_LIMIT, offset).await {
            Ok(pages) => {
                let count = pages.len();
                let cards = app.pages.lock_mut().finish_load(pages);
                log::debug!("load_pages: offset {offset}, fetched {count}, new {}", cards.len());
                app.cards.lock_mut().extend(cards);
            }
            Err(err) => {
                log::error!("load_pages: {err}");
                app.pages.lock_mut().fail_load();
                app.dialogs.alert(MSG_ERROR);
            }
        }
    });
}

pub fn pages_start(app: Rc<App>) {
    init_scroll(app.clone());
    spawn_local(async move {
        if let Err(err) = app.session.ensure_account().await {
            log::error!("pages_start: {err}");
            app.dialogs.alert(MSG_ERROR);
            return;
        }
        app.pages.lock_mut().set_ready();
        load_pages(&app);
    });
}

fn init_scroll(app: Rc<App>) {
    let Some(w) = web_sys::window() else { return };
    let w1 = w.clone();
    let listener_callback = Closure::<dyn FnMut()>::new(move || {
        let page_height = w1.document()
            .and_then(|d| d.document_element())
            .map(|e| e.scroll_height())
            .unwrap_or_default();
        let scroll_top = w1.scroll_y().unwrap_or_default() as i32;
        let viewport_height = w1.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default() as i32;
        if app.pages.lock_ref().should_autoload(scroll_top, viewport_height, page_height) {
            load_pages(&app);
        }
    });
    if w.add_event_listener_with_callback("scroll", listener_callback.as_ref().unchecked_ref()).is_err() {
        log::error!("init_scroll: listener not attached");
    }
    listener_callback.forget();
}
