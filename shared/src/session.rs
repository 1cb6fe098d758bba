//! Per-page-load client state: the account in use, the page being viewed and
//! the flows that act on them.

use futures_signals::signal::Mutable;

use crate::api::{ApiClient, Transport};
use crate::constants::DEFAULT_SHORT_NAME;
use crate::error::ApiError;
use crate::types::{Account, Page, PageForm, ProfileForm};
use crate::utils::is_token_plausible;

/// Persistent home of the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Edited(Page),
    Created(Page),
}

pub struct ClientSession<T, S> {
    api: ApiClient<T>,
    store: S,
    account: Mutable<Option<Account>>,
    page: Mutable<Option<Page>>,
}

impl<T: Transport, S: TokenStore> ClientSession<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self {
            api: ApiClient::new(transport),
            store,
            account: Mutable::new(None),
            page: Mutable::new(None),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[cfg(test)]
    fn account(&self) -> &Mutable<Option<Account>> {
        &self.account
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    /// Account for the rest of the page lifetime. Reuses the stored token when
    /// the server still knows it, otherwise provisions an anonymous account
    /// and overwrites the stored token.
    pub async fn ensure_account(&self) -> Result<Account, ApiError> {
        if let Some(account) = self.account.get_cloned() {
            return Ok(account);
        }

        if let Some(token) = self.stored_token() {
            match self.api.get_account_info(&token).await {
                Ok(account) => {
                    log::info!("ensure_account: stored token accepted");
                    self.account.set(Some(account.clone()));
                    return Ok(account);
                }
                Err(err) => {
                    log::warn!("ensure_account: stored token rejected: {err}");
                }
            }
        }

        let account = self.api.create_account(DEFAULT_SHORT_NAME).await?;
        log::info!("ensure_account: anonymous account created");
        self.store.save(&account.access_token);
        self.account.set(Some(account.clone()));
        Ok(account)
    }

    /// Switches to an existing account by token. Nothing is stored unless the
    /// server resolves the token.
    pub async fn authorize_token(&self, token: &str) -> Result<Account, ApiError> {
        let token = token.trim();
        if !is_token_plausible(token) {
            return Err(ApiError::InvalidToken);
        }
        let account = self.api.get_account_info(token).await?;
        self.store.save(token);
        self.account.set(Some(account.clone()));
        Ok(account)
    }

    pub async fn save_profile(&self, author_name: &str, author_url: &str) -> Result<Account, ApiError> {
        let account = self.ensure_account().await?;
        let profile = ProfileForm::new(author_name, author_url);
        let edited = self.api.edit_account_info(&account.access_token, &profile).await?;
        let mut lock = self.account.lock_mut();
        let mut current = lock.take().unwrap_or(account);
        current.apply(edited);
        *lock = Some(current.clone());
        Ok(current)
    }

    /// Current page, fetched once per navigation.
    pub async fn page_info(&self, page_uri: &str) -> Result<Page, ApiError> {
        if let Some(page) = self.page.get_cloned() {
            return Ok(page);
        }
        let account = self.ensure_account().await?;
        let page = self.api.get_page(page_uri, Some(&account.access_token)).await?;
        self.page.set(Some(page.clone()));
        Ok(page)
    }

    pub async fn can_edit(&self, page_uri: Option<&str>) -> bool {
        match page_uri {
            Some(page_uri) => match self.page_info(page_uri).await {
                Ok(page) => page.can_edit,
                Err(err) => {
                    log::error!("can_edit: {err}");
                    false
                }
            },
            None => false,
        }
    }

    /// Edits the current page when allowed, otherwise publishes a new one.
    pub async fn save_page(&self, page_uri: Option<&str>, form: &PageForm) -> Result<Saved, ApiError> {
        let account = self.ensure_account().await?;
        if self.can_edit(page_uri).await {
            let path = self.page.get_cloned().map(|page| page.path).ok_or(ApiError::NoPage)?;
            let page = self.api.edit_page(&account.access_token, &path, form).await?;
            Ok(Saved::Edited(page))
        } else {
            let page = self.api.create_page(&account.access_token, form).await?;
            Ok(Saved::Created(page))
        }
    }

    /// Deletes the current page and returns its path.
    pub async fn delete_page(&self, page_uri: &str) -> Result<String, ApiError> {
        let account = self.ensure_account().await?;
        let path = self.page_info(page_uri).await?.path;
        let result = self.api.delete_page(&account.access_token, &path).await?;
        if !result.ok {
            log::warn!("delete_page: server did not confirm deletion of {path}");
        }
        Ok(path)
    }

    pub async fn record_view(&self, path: &str) {
        if let Err(err) = self.api.add_view(path).await {
            log::debug!("record_view: {err}");
        }
    }

    pub async fn next_pages(&self, limit: usize, offset: usize) -> Result<Vec<Page>, ApiError> {
        let account = self.ensure_account().await?;
        self.api.get_pages(&account.access_token, limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde_json::{json, Value};

    use super::*;
    use crate::api::mock::{Call, MockTransport};

    #[derive(Default)]
    struct MemoryStore {
        token: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn with(token: &str) -> Self {
            Self { token: RefCell::new(Some(token.to_string())) }
        }
    }

    impl TokenStore for &MemoryStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }
    }

    fn account_json(token: &str) -> Value {
        json!({"short_name": "Anonymous", "author_name": "Anonymous", "author_url": "", "access_token": token})
    }

    fn page_json(path: &str, can_edit: bool) -> Value {
        json!({"path": path, "title": "T", "author_name": "Anonymous", "can_edit": can_edit, "views": 3, "created": "2026-10-18T09:15:00"})
    }

    const STORED: &str = "stored-token-0001";
    const CREATED: &str = "created-token-0002";

    #[test]
    fn no_token_creates_and_persists() {
        let store = MemoryStore::default();
        let session = ClientSession::new(MockTransport::default().reply(account_json(CREATED)), &store);
        let account = block_on(session.ensure_account()).unwrap();
        assert_eq!(account.access_token, CREATED);
        assert_eq!(store.token.borrow().as_deref(), Some(CREATED));
        assert_eq!(session.api().transport().uris(), vec!["/api/createAccount?short_name=Anonymous".to_string()]);
    }

    #[test]
    fn empty_stored_token_creates_without_lookup() {
        let store = MemoryStore::with("");
        let session = ClientSession::new(MockTransport::default().reply(account_json(CREATED)), &store);
        assert_eq!(session.stored_token(), None);
        let account = block_on(session.ensure_account()).unwrap();
        assert_eq!(account.access_token, CREATED);
        assert_eq!(store.token.borrow().as_deref(), Some(CREATED));
        assert_eq!(session.api().transport().uris(), vec!["/api/createAccount?short_name=Anonymous".to_string()]);
    }

    #[test]
    fn stored_token_is_reused() {
        let store = MemoryStore::with(STORED);
        let session = ClientSession::new(MockTransport::default().reply(account_json(STORED)), &store);
        let account = block_on(session.ensure_account()).unwrap();
        assert_eq!(account.access_token, STORED);
        assert_eq!(session.api().transport().uris(), vec![format!("/api/getAccountInfo?token={STORED}")]);
    }

    #[test]
    fn rejected_token_falls_back_to_create() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default().fail(ApiError::Unauthorized).reply(account_json(CREATED));
        let session = ClientSession::new(transport, &store);
        let account = block_on(session.ensure_account()).unwrap();
        assert_eq!(account.access_token, CREATED);
        assert_eq!(store.token.borrow().as_deref(), Some(CREATED));
        assert_eq!(session.api().transport().calls.borrow().len(), 2);
    }

    #[test]
    fn account_is_memoized() {
        let store = MemoryStore::default();
        let session = ClientSession::new(MockTransport::default().reply(account_json(CREATED)), &store);
        block_on(session.ensure_account()).unwrap();
        block_on(session.ensure_account()).unwrap();
        assert_eq!(session.api().transport().calls.borrow().len(), 1);
    }

    #[test]
    fn create_failure_is_reported() {
        let store = MemoryStore::default();
        let session = ClientSession::new(MockTransport::default().fail(ApiError::Status(429)), &store);
        assert_eq!(block_on(session.ensure_account()), Err(ApiError::Status(429)));
        assert!(store.token.borrow().is_none());
        assert!(session.account().get_cloned().is_none());
    }

    #[test]
    fn authorize_short_token_is_rejected_locally() {
        let store = MemoryStore::default();
        let session = ClientSession::new(MockTransport::default(), &store);
        assert_eq!(block_on(session.authorize_token("abc")), Err(ApiError::InvalidToken));
        assert!(session.api().transport().calls.borrow().is_empty());
    }

    #[test]
    fn authorize_stores_only_resolved_tokens() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default().fail(ApiError::Unauthorized).reply(account_json(CREATED));
        let session = ClientSession::new(transport, &store);
        assert_eq!(block_on(session.authorize_token(CREATED)), Err(ApiError::Unauthorized));
        assert_eq!(store.token.borrow().as_deref(), Some(STORED));
        block_on(session.authorize_token(CREATED)).unwrap();
        assert_eq!(store.token.borrow().as_deref(), Some(CREATED));
    }

    #[test]
    fn page_info_is_cached() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default().reply(account_json(STORED)).reply(page_json("p-1", true));
        let session = ClientSession::new(transport, &store);
        assert!(block_on(session.can_edit(Some("p-1"))));
        assert!(block_on(session.can_edit(Some("p-1"))));
        assert!(!block_on(session.can_edit(None)));
        assert_eq!(session.api().transport().calls.borrow().len(), 2);
    }

    #[test]
    fn save_edits_own_page() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default()
            .reply(account_json(STORED))
            .reply(page_json("p-1", true))
            .reply(page_json("p-1", true));
        let session = ClientSession::new(transport, &store);
        let form = PageForm { title: "T".to_string(), ..PageForm::default() };
        let saved = block_on(session.save_page(Some("p-1"), &form)).unwrap();
        assert!(matches!(saved, Saved::Edited(_)));
        let calls = session.api().transport().calls.borrow();
        assert!(matches!(&calls[2], Call::Post(uri, _) if uri == "/api/editPage/p-1"));
    }

    #[test]
    fn save_foreign_page_creates_copy() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default()
            .reply(account_json(STORED))
            .reply(page_json("p-1", false))
            .reply(page_json("t-10-18", true));
        let session = ClientSession::new(transport, &store);
        let saved = block_on(session.save_page(Some("p-1"), &PageForm::default())).unwrap();
        assert_eq!(saved, Saved::Created(serde_json::from_value(page_json("t-10-18", true)).unwrap()));
    }

    #[test]
    fn save_on_root_creates() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default().reply(account_json(STORED)).reply(page_json("t-10-18", true));
        let session = ClientSession::new(transport, &store);
        let saved = block_on(session.save_page(None, &PageForm::default())).unwrap();
        assert!(matches!(saved, Saved::Created(page) if page.path == "t-10-18"));
    }

    #[test]
    fn profile_update_refreshes_account() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default()
            .reply(account_json(STORED))
            .reply(json!({"short_name": "Anonymous", "author_name": "Ann", "author_url": "https://ann.example"}));
        let session = ClientSession::new(transport, &store);
        let account = block_on(session.save_profile("Ann", "https://ann.example")).unwrap();
        assert_eq!(account.author_name, "Ann");
        assert_eq!(account.access_token, STORED);
        assert_eq!(session.account().get_cloned().map(|a| a.author_url), Some("https://ann.example".to_string()));
    }

    #[test]
    fn delete_uses_page_path() {
        let store = MemoryStore::with(STORED);
        let transport = MockTransport::default()
            .reply(account_json(STORED))
            .reply(page_json("p-1", true))
            .reply(json!({"ok": true}));
        let session = ClientSession::new(transport, &store);
        assert_eq!(block_on(session.delete_page("P-1")), Ok("p-1".to_string()));
        assert_eq!(session.api().transport().uris()[2], format!("/api/deletePage/p-1?token={STORED}"));
    }
}
