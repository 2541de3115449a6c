use std::time::Duration;

use super::config::ClientConfig;
use super::upload_file::UploadFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// One part of a multipart/form-data body
#[derive(Debug, Clone)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// Description of a single backend call, executed by a [`super::Transport`]
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: RequestBody,
    pub timeout: Duration,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: RequestBody::Empty,
            timeout,
        }
    }

    pub fn post_multipart(path: impl Into<String>, parts: Vec<FormPart>, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: RequestBody::Multipart(parts),
            timeout,
        }
    }

    pub fn put_json(path: impl Into<String>, body: serde_json::Value, timeout: Duration) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            body: RequestBody::Json(body),
            timeout,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self.body, RequestBody::Multipart(_))
    }

    /// Headers to send. Multipart bodies drop the default Content-Type so the
    /// browser can set it together with the boundary.
    pub fn headers(&self, config: &ClientConfig) -> Vec<(String, String)> {
        config
            .default_headers
            .iter()
            .filter(|(name, _)| !(self.is_multipart() && name.eq_ignore_ascii_case("content-type")))
            .cloned()
            .collect()
    }

    /// Multipart parts with the given field name
    pub fn parts_named<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FormPart> + 'a {
        let parts: &[FormPart] = match &self.body {
            RequestBody::Multipart(parts) => parts,
            _ => &[],
        };
        parts.iter().filter(move |p| p.name() == field)
    }
}
