use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use shared::api::Transport;
use shared::error::ApiError;

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Same-origin `fetch`, JSON responses decoded with `serde-wasm-bindgen`.
pub struct FetchTransport {
    origin: String,
}

impl FetchTransport {
    pub fn new(origin: String) -> Self {
        Self { origin }
    }

    async fn request<R: DeserializeOwned>(&self, uri: &str, body: Option<String>) -> Result<R, ApiError> {
        let url = format!("{}{uri}", self.origin);
        match send(&url, body).await {
            Ok(data) => {
                log::debug!("fetch {uri}: ok");
                serde_wasm_bindgen::from_value::<R>(data).map_err(|err| ApiError::Decode(err.to_string()))
            }
            Err(err) => {
                log::error!("fetch {uri}: {err}");
                Err(err)
            }
        }
    }
}

impl Transport for FetchTransport {
    async fn get<R: DeserializeOwned>(&self, uri: &str) -> Result<R, ApiError> {
        self.request(uri, None).await
    }

    async fn post_form<R: DeserializeOwned>(&self, uri: &str, body: String) -> Result<R, ApiError> {
        self.request(uri, Some(body)).await
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

async fn send(url: &str, body: Option<String>) -> Result<JsValue, ApiError> {
    let opts = RequestInit::new();
    let is_post = body.is_some();
    match body {
        Some(body) => {
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(&body));
        }
        None => opts.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if is_post {
        request.headers().set("Content-Type", CONTENT_TYPE_FORM).map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?).await
        .map_err(|err| ApiError::Decode(format!("{err:?}")))?;

    Ok(json)
}
