use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, FormData};

use super::config::ClientConfig;
use super::error::TransportError;
use super::request::{ApiRequest, FormPart, HttpMethod, RequestBody};

/// Executes an [`ApiRequest`] and returns the decoded JSON body of a 2xx response
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(
        &self,
        config: &ClientConfig,
        request: ApiRequest,
    ) -> Result<serde_json::Value, TransportError>;
}

/// gloo-net (fetch) transport used by the running app
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_err(e: wasm_bindgen::JsValue) -> TransportError {
    TransportError::network(format!("{e:?}"))
}

fn build_form_data(parts: &[FormPart]) -> Result<FormData, TransportError> {
    let form_data = FormData::new().map_err(js_err)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => {
                form_data.append_with_str(name, value).map_err(js_err)?;
            }
            FormPart::File { name, file } => {
                let blob = file.blob().ok_or_else(|| {
                    TransportError::network(format!("File {} has no content", file.name()))
                })?;
                form_data
                    .append_with_blob_and_filename(name, blob, file.name())
                    .map_err(js_err)?;
            }
        }
    }
    Ok(form_data)
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(
        &self,
        config: &ClientConfig,
        request: ApiRequest,
    ) -> Result<serde_json::Value, TransportError> {
        let url = config.url(&request.path);
        let headers = request.headers(config);

        let controller = AbortController::new().map_err(js_err)?;
        let signal = controller.signal();
        let timeout_ms = request.timeout.as_millis() as u32;
        // Dropping the timeout cancels it, so it only fires while the call is pending
        let _timeout = Timeout::new(timeout_ms, move || controller.abort());

        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        builder = builder.abort_signal(Some(&signal));

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(build_form_data(parts)?),
        }
        .map_err(|e| TransportError::network(format!("Failed to build request: {}", e)))?;

        let response = match prepared.send().await {
            Ok(r) => r,
            Err(_) if signal.aborted() => {
                return Err(TransportError::network(format!(
                    "timeout of {}ms exceeded",
                    timeout_ms
                )));
            }
            Err(e) => return Err(TransportError::network(e.to_string())),
        };

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {}", e)))?;
        let parsed = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<serde_json::Value>(&text).ok()
        };

        if !response.ok() {
            log::error!(
                "{} {} failed with status {}",
                request.method.as_str(),
                url,
                response.status()
            );
            return Err(TransportError::status(response.status(), parsed));
        }

        match parsed {
            Some(value) => Ok(value),
            None if text.trim().is_empty() => Ok(serde_json::Value::Null),
            None => Err(TransportError::network("Failed to parse response: invalid JSON")),
        }
    }
}
