use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::constants::{API_ADD_VIEW, API_CREATE_ACCOUNT, API_CREATE_PAGE, API_DELETE_PAGE, API_EDIT_ACCOUNT, API_EDIT_PAGE, API_GET_ACCOUNT, API_GET_PAGE, API_GET_PAGES, ROOT_API};
use crate::error::ApiError;
use crate::types::{Account, AccountEdited, DeleteResult, Page, PageForm, ProfileForm};

/// HTTP plumbing. `uri` is origin-relative; bodies are url-encoded forms,
/// responses are JSON.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get<R: DeserializeOwned>(&self, uri: &str) -> Result<R, ApiError>;
    async fn post_form<R: DeserializeOwned>(&self, uri: &str, body: String) -> Result<R, ApiError>;
}

pub struct ApiClient<T> {
    transport: T,
}

fn endpoint(name: &str) -> String {
    format!("/{ROOT_API}/{name}")
}

fn endpoint_for(name: &str, page_uri: &str) -> String {
    format!("/{ROOT_API}/{name}/{}", page_uri.trim_start_matches('/'))
}

fn with_query<Q: Serialize>(uri: String, query: Q) -> Result<String, ApiError> {
    let query = serde_urlencoded::to_string(query)?;
    Ok(if query.is_empty() { uri } else { format!("{uri}?{query}") })
}

fn token_form<F: Serialize>(token: &str, form: &F) -> Result<String, ApiError> {
    let token = serde_urlencoded::to_string([("token", token)])?;
    let form = serde_urlencoded::to_string(form)?;
    Ok(format!("{token}&{form}"))
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn create_account(&self, short_name: &str) -> Result<Account, ApiError> {
        let uri = with_query(endpoint(API_CREATE_ACCOUNT), [("short_name", short_name)])?;
        self.transport.get(&uri).await
    }

    pub async fn get_account_info(&self, token: &str) -> Result<Account, ApiError> {
        let uri = with_query(endpoint(API_GET_ACCOUNT), [("token", token)])?;
        self.transport.get(&uri).await
    }

    pub async fn edit_account_info(&self, token: &str, profile: &ProfileForm) -> Result<AccountEdited, ApiError> {
        let uri = with_query(endpoint(API_EDIT_ACCOUNT), [
            ("token", token),
            ("author_name", profile.author_name.as_str()),
            ("author_url", profile.author_url.as_str()),
        ])?;
        self.transport.get(&uri).await
    }

    /// Page metadata only, content is not requested.
    pub async fn get_page(&self, page_uri: &str, token: Option<&str>) -> Result<Page, ApiError> {
        let base = endpoint_for(API_GET_PAGE, page_uri);
        let uri = match token {
            Some(token) => with_query(base, [("token", token), ("return_content", "false")])?,
            None => with_query(base, [("return_content", "false")])?,
        };
        self.transport.get(&uri).await
    }

    pub async fn edit_page(&self, token: &str, page_uri: &str, form: &PageForm) -> Result<Page, ApiError> {
        let body = token_form(token, form)?;
        self.transport.post_form(&endpoint_for(API_EDIT_PAGE, page_uri), body).await
    }

    pub async fn create_page(&self, token: &str, form: &PageForm) -> Result<Page, ApiError> {
        let body = token_form(token, form)?;
        self.transport.post_form(&endpoint(API_CREATE_PAGE), body).await
    }

    pub async fn delete_page(&self, token: &str, page_uri: &str) -> Result<DeleteResult, ApiError> {
        let uri = with_query(endpoint_for(API_DELETE_PAGE, page_uri), [("token", token)])?;
        self.transport.get(&uri).await
    }

    pub async fn add_view(&self, page_uri: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.transport.get(&endpoint_for(API_ADD_VIEW, page_uri)).await?;
        Ok(())
    }

    pub async fn get_pages(&self, token: &str, limit: usize, offset: usize) -> Result<Vec<Page>, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let uri = with_query(endpoint(API_GET_PAGES), [
            ("token", token),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
        ])?;
        self.transport.get(&uri).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use super::Transport;
    use crate::error::ApiError;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Get(String),
        Post(String, String),
    }

    /// Answers requests in order from a queue and records every call.
    #[derive(Default)]
    pub struct MockTransport {
        pub calls: RefCell<Vec<Call>>,
        replies: RefCell<VecDeque<Result<Value, ApiError>>>,
    }

    impl MockTransport {
        pub fn reply(self, value: Value) -> Self {
            self.replies.borrow_mut().push_back(Ok(value));
            self
        }

        pub fn fail(self, err: ApiError) -> Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn uris(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|call| match call {
                Call::Get(uri) | Call::Post(uri, _) => uri.clone(),
            }).collect()
        }

        fn next<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
            let reply = self.replies.borrow_mut().pop_front().unwrap_or(Err(ApiError::Network("no reply".to_string())))?;
            serde_json::from_value(reply).map_err(|err| ApiError::Decode(err.to_string()))
        }
    }

    impl Transport for MockTransport {
        async fn get<R: DeserializeOwned>(&self, uri: &str) -> Result<R, ApiError> {
            self.calls.borrow_mut().push(Call::Get(uri.to_string()));
            self.next()
        }

        async fn post_form<R: DeserializeOwned>(&self, uri: &str, body: String) -> Result<R, ApiError> {
            self.calls.borrow_mut().push(Call::Post(uri.to_string(), body));
            self.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::mock::{Call, MockTransport};
    use super::*;

    #[test]
    fn query_parameters_are_encoded() {
        let api = ApiClient::new(MockTransport::default().reply(json!({"short_name": "s", "author_name": "a b", "author_url": ""})));
        let profile = ProfileForm::new("a b", "https://x.org/?q=1&r=2");
        block_on(api.edit_account_info("tok", &profile)).unwrap();
        assert_eq!(api.transport().uris(), vec![
            "/api/editAccountInfo?token=tok&author_name=a+b&author_url=https%3A%2F%2Fx.org%2F%3Fq%3D1%26r%3D2".to_string()
        ]);
    }

    #[test]
    fn get_page_without_content() {
        let page = json!({"path": "p-1", "title": "P"});
        let api = ApiClient::new(MockTransport::default().reply(page.clone()).reply(page));
        block_on(api.get_page("p-1", Some("tok"))).unwrap();
        block_on(api.get_page("/p-1", None)).unwrap();
        assert_eq!(api.transport().uris(), vec![
            "/api/getPage/p-1?token=tok&return_content=false".to_string(),
            "/api/getPage/p-1?return_content=false".to_string(),
        ]);
    }

    #[test]
    fn create_page_posts_token_first() {
        let api = ApiClient::new(MockTransport::default().reply(json!({"path": "hi-10-18", "title": "Hi"})));
        let form = PageForm { title: "Hi".to_string(), author_name: "me".to_string(), author_url: String::new(), content: r#"["x"]"#.to_string() };
        let page = block_on(api.create_page("tok", &form)).unwrap();
        assert_eq!(page.path, "hi-10-18");
        assert_eq!(api.transport().calls.borrow()[0], Call::Post(
            "/api/createPage".to_string(),
            "token=tok&title=Hi&author_name=me&author_url=&content=%5B%22x%22%5D".to_string(),
        ));
    }

    #[test]
    fn add_view_ignores_body() {
        let api = ApiClient::new(MockTransport::default().reply(json!({"anything": [1, 2]})));
        assert_eq!(block_on(api.add_view("p-1")), Ok(()));
        assert_eq!(api.transport().uris(), vec!["/api/addView/p-1".to_string()]);
    }

    #[test]
    fn get_pages_paging() {
        let api = ApiClient::new(MockTransport::default().reply(json!([])));
        let pages = block_on(api.get_pages("tok", 10, 20)).unwrap();
        assert!(pages.is_empty());
        assert_eq!(api.transport().uris(), vec!["/api/getPages?token=tok&limit=10&offset=20".to_string()]);
    }

    #[test]
    fn errors_propagate() {
        let api = ApiClient::new(MockTransport::default().fail(ApiError::Forbidden));
        assert_eq!(block_on(api.delete_page("tok", "p-1")), Err(ApiError::Forbidden));
    }
}
