use async_trait::async_trait;
use ledgerview::api::{HttpClient, HttpResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `window.fetch` behind the core's [`HttpClient`].
pub(super) struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse, String> {
        let window = web_sys::window().ok_or("no window")?;

        let headers =
            web_sys::Headers::new().map_err(|_| "fetch: Headers::new failed".to_string())?;
        headers
            .set("Authorization", authorization)
            .map_err(|_| "fetch: set header failed".to_string())?;

        let init = web_sys::RequestInit::new();
        init.set_method("GET");
        init.set_headers(&headers);
        let request = web_sys::Request::new_with_str_and_init(url, &init)
            .map_err(|e| format!("fetch: bad request: {}", js_error_message(&e)))?;

        let v = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch: {}", js_error_message(&e)))?;
        let response = v
            .dyn_into::<web_sys::Response>()
            .map_err(|_| "fetch: expected Response".to_string())?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|_| "fetch: text() threw".to_string())?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| format!("fetch: reading body failed: {}", js_error_message(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

fn js_error_message(v: &JsValue) -> String {
    if let Some(e) = v.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    v.as_string().unwrap_or_else(|| "unknown error".to_string())
}
