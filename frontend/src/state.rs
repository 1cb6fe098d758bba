use std::rc::Rc;

use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;

use shared::listing::{PageCard, PagesState};
use shared::route::Route;
use shared::session::ClientSession;

use crate::connect_fetch::FetchTransport;
use crate::connect_storage::LocalTokenStore;
use crate::dialog::dialogs::Dialogs;
use crate::editor::state::EditorState;
use crate::utils::get_origin;

pub type AppSession = ClientSession<FetchTransport, LocalTokenStore>;

/// Everything one page load needs, created at start and dropped with the page.
pub struct App {
    pub route: Route,
    pub session: AppSession,
    pub dialogs: Rc<Dialogs>,
    pub editor: EditorState,
    pub pages: Mutable<PagesState>,
    pub cards: MutableVec<PageCard>,
    pub auth_busy: Mutable<bool>,
}

impl App {
    pub fn new(route: Route) -> Rc<Self> {
        Rc::new(Self {
            route,
            session: ClientSession::new(FetchTransport::new(get_origin()), LocalTokenStore),
            dialogs: Rc::new(Dialogs::new()),
            editor: EditorState::new(),
            pages: Mutable::new(PagesState::default()),
            cards: MutableVec::new(),
            auth_busy: Mutable::new(false),
        })
    }

    pub fn page_uri(&self) -> Option<&str> {
        self.route.page_uri()
    }
}
