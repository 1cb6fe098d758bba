use shared::route::Route;

use crate::elements::app_root::app_root;
use crate::state::App;
use crate::utils::get_pathname;

mod elements;
mod utils;
mod constants;
mod state;
mod types;
mod dialog;
mod connect_fetch;
mod connect_storage;
mod editor;
mod loader;

pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));

    let app = App::new(Route::from_pathname(&get_pathname()));
    dominator::append_dom(&dominator::body(), app_root(app));
}
