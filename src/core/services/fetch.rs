use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::http::{HttpBackend, HttpRequest, HttpResponse};
use crate::core::error::ClientError;

/// `HttpBackend` over the browser Fetch API.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchBackend;

fn js_err(value: JsValue) -> ClientError {
    let detail = value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "unknown JavaScript error".to_string());
    ClientError::Network(detail)
}

#[async_trait(?Send)]
impl HttpBackend for FetchBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let window = web_sys::window().ok_or_else(|| ClientError::Network("no window available".to_string()))?;

        let init = web_sys::RequestInit::new();
        init.set_method(request.method.as_str());

        let headers = web_sys::Headers::new().map_err(js_err)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_err)?;
        }
        init.set_headers(&headers);

        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }
        if request.include_cookies {
            init.set_credentials(web_sys::RequestCredentials::Include);
        }

        let fetch_request = web_sys::Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
        let response_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_err)?;
        let response: web_sys::Response = response_value.dyn_into().map_err(js_err)?;

        let text = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
