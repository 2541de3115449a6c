use std::sync::Arc;

use contracts::domain::a001_travel_request::{ReportDraft, TravelRequest};
use contracts::shared::api::{SubmitReportResponse, TestConnectionResponse};
use contracts::shared::upload::validate_upload_files;
use leptos::context::use_context;
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::error::{ApiError, ReportError, TransportError};
use super::request::{ApiRequest, FormPart};
use super::transport::{BrowserTransport, Transport};
use super::upload_file::UploadFile;

const GENERATE_REPORT_ERROR: &str = "Error generating report";
const SUBMIT_REPORT_ERROR: &str = "Error submitting report";
const UPDATE_REPORT_ERROR: &str = "Error updating report";

/// Typed access to the backend endpoints
#[derive(Debug, Clone)]
pub struct ApiClient<T = BrowserTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, BrowserTransport)
    }
}

/// Client provided by `App`
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}

fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn file_parts(files: &[UploadFile]) -> impl Iterator<Item = FormPart> + '_ {
    files.iter().map(|file| FormPart::File {
        name: "files".to_string(),
        file: file.clone(),
    })
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, TransportError> {
        let value = self.transport.execute(&self.config, request).await?;
        serde_json::from_value(value).map_err(TransportError::decode)
    }

    async fn send_normalized<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<R, ReportError> {
        self.send(request)
            .await
            .map_err(|e| ReportError::Api(ApiError::normalize(&e, fallback)))
    }

    /// GET /api/test/
    pub async fn test_connection(&self) -> Result<TestConnectionResponse, TransportError> {
        self.send(ApiRequest::get("/test/", self.config.timeout)).await
    }

    /// GET /api/requests/{id}/
    pub async fn get_request(&self, id: &str) -> Result<TravelRequest, TransportError> {
        let path = format!("/requests/{}/", encode_id(id));
        self.send(ApiRequest::get(path, self.config.timeout)).await
    }

    /// POST /api/travel-requests/generate-report/
    ///
    /// Files are validated before anything is sent.
    pub async fn generate_report(&self, files: &[UploadFile]) -> Result<ReportDraft, ReportError> {
        validate_upload_files(files)?;

        let parts: Vec<FormPart> = file_parts(files).collect();
        let request = ApiRequest::post_multipart(
            "/travel-requests/generate-report/",
            parts,
            self.config.upload_timeout,
        );
        self.send_normalized(request, GENERATE_REPORT_ERROR).await
    }

    /// POST /api/travel-requests/submit-report/
    ///
    /// The draft goes into the `data` field as a JSON string. Files are optional;
    /// when present they are validated and attached as `files`.
    pub async fn submit_report(
        &self,
        draft: &ReportDraft,
        files: &[UploadFile],
    ) -> Result<SubmitReportResponse, ReportError> {
        log::debug!("API Service - data being sent: {:?}", draft);

        let data = serde_json::to_string(draft).map_err(|e| ApiError {
            message: format!("Failed to serialize report: {}", e),
        })?;

        let mut parts = vec![FormPart::Text {
            name: "data".to_string(),
            value: data,
        }];
        if !files.is_empty() {
            validate_upload_files(files)?;
            parts.extend(file_parts(files));
        }

        let request = ApiRequest::post_multipart(
            "/travel-requests/submit-report/",
            parts,
            self.config.upload_timeout,
        );
        self.send_normalized(request, SUBMIT_REPORT_ERROR).await
    }

    /// PUT /api/travel-requests/{id}/update-report/
    pub async fn update_report(
        &self,
        id: &str,
        draft: &ReportDraft,
    ) -> Result<TravelRequest, ReportError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError {
            message: format!("Failed to serialize report: {}", e),
        })?;
        let path = format!("/travel-requests/{}/update-report/", encode_id(id));
        let request = ApiRequest::put_json(path, body, self.config.timeout);
        self.send_normalized(request, UPDATE_REPORT_ERROR).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::request::{HttpMethod, RequestBody};
    use async_trait::async_trait;
    use contracts::domain::a001_travel_request::Expense;
    use contracts::shared::upload::{FileValidationError, MAX_UPLOAD_FILE_SIZE};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Records every request and replies from a queue
    #[derive(Clone, Default)]
    struct MockTransport {
        calls: Rc<RefCell<Vec<ApiRequest>>>,
        replies: Rc<RefCell<VecDeque<Result<serde_json::Value, TransportError>>>>,
    }

    impl MockTransport {
        fn reply(&self, reply: Result<serde_json::Value, TransportError>) {
            self.replies.borrow_mut().push_back(reply);
        }

        fn calls(&self) -> Vec<ApiRequest> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn execute(
            &self,
            _config: &ClientConfig,
            request: ApiRequest,
        ) -> Result<serde_json::Value, TransportError> {
            self.calls.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(serde_json::Value::Null))
        }
    }

    fn client() -> (ApiClient<MockTransport>, MockTransport) {
        let transport = MockTransport::default();
        (ApiClient::new(ClientConfig::default(), transport.clone()), transport)
    }

    fn pdf(name: &str) -> UploadFile {
        UploadFile::metadata_only(name, 2048, "application/pdf")
    }

    fn draft() -> ReportDraft {
        ReportDraft {
            requester: "John Doe".into(),
            department: "Engineering".into(),
            position: "Software Engineer".into(),
            start_date: "2024-01-15".into(),
            end_date: "2024-01-20".into(),
            total_amount: 450.0,
            expenses: vec![Expense {
                id: Some("1".into()),
                date: "2024-01-15".into(),
                category: "Transportation".into(),
                description: "Flight to New York".into(),
                amount: 450.0,
            }],
            uploaded_files: vec![],
        }
    }

    fn generated_report() -> serde_json::Value {
        serde_json::to_value(draft()).unwrap()
    }

    fn travel_request_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": "travel_request",
            "requester": "John Doe",
            "status": "PENDING_REVIEW",
            "created_at": "2024-01-21T10:00:00Z",
            "updated_at": "2024-01-21T10:00:00Z",
            "start_date": "2024-01-15",
            "end_date": "2024-01-20",
            "total_amount": 450.0,
            "department": "Engineering",
            "position": "Software Engineer",
            "documents": [],
            "expenses": [],
            "history": []
        })
    }

    #[test]
    fn test_connection_hits_test_endpoint() {
        let (client, transport) = client();
        transport.reply(Ok(json!({"status": "ok", "message": "Backend connection successful"})));

        let response = block_on(client.test_connection()).unwrap();
        assert_eq!(response.status, "ok");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert_eq!(calls[0].path, "/test/");
        assert_eq!(calls[0].timeout, client.config().timeout);
    }

    #[test]
    fn test_get_request_propagates_transport_error() {
        let (client, transport) = client();
        let err = TransportError::status(404, Some(json!({"error": "Travel request not found"})));
        transport.reply(Err(err.clone()));

        let result = block_on(client.get_request("42"));
        assert_eq!(result.unwrap_err(), err);
        assert_eq!(transport.calls()[0].path, "/requests/42/");
    }

    #[test]
    fn test_get_request_decodes_travel_request() {
        let (client, transport) = client();
        let id = "0b7a6c1e-8a53-4f4e-9a43-1f3f7f5d2c10";
        transport.reply(Ok(travel_request_json(id)));

        let request = block_on(client.get_request(id)).unwrap();
        assert_eq!(request.requester, "John Doe");
        assert_eq!(request.id.0.to_string(), id);
    }

    #[test]
    fn test_generate_report_rejects_empty_and_oversized_sets_without_network() {
        let (client, transport) = client();

        let err = block_on(client.generate_report(&[])).unwrap_err();
        assert_eq!(err, ReportError::Validation(FileValidationError::NoFiles));

        let six: Vec<UploadFile> = (0..6).map(|i| pdf(&format!("{i}.pdf"))).collect();
        let err = block_on(client.generate_report(&six)).unwrap_err();
        assert_eq!(err, ReportError::Validation(FileValidationError::TooManyFiles { count: 6 }));

        let big = UploadFile::metadata_only("big.pdf", MAX_UPLOAD_FILE_SIZE + 1, "application/pdf");
        let err = block_on(client.generate_report(&[big])).unwrap_err();
        assert_eq!(err.to_string(), "File big.pdf exceeds 10MB limit");

        let txt = UploadFile::metadata_only("notes.txt", 10, "text/plain");
        let err = block_on(client.generate_report(&[pdf("a.pdf"), txt])).unwrap_err();
        assert_eq!(err.to_string(), "File notes.txt is not a PDF");

        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_generate_report_sends_one_multipart_post_with_all_files() {
        let (client, transport) = client();
        transport.reply(Ok(generated_report()));
        let files = vec![pdf("flight.pdf"), pdf("hotel.pdf"), pdf("taxi.pdf")];

        let draft = block_on(client.generate_report(&files)).unwrap();
        assert_eq!(draft.requester, "John Doe");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/travel-requests/generate-report/");
        assert_eq!(call.timeout, client.config().upload_timeout);
        assert!(call.is_multipart());

        let sent: Vec<String> = call
            .parts_named("files")
            .map(|p| match p {
                FormPart::File { file, .. } => file.name().to_string(),
                FormPart::Text { .. } => panic!("files part must carry a file"),
            })
            .collect();
        assert_eq!(sent, vec!["flight.pdf", "hotel.pdf", "taxi.pdf"]);

        let RequestBody::Multipart(parts) = &call.body else {
            panic!("expected multipart body");
        };
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_generate_report_normalizes_errors() {
        let (client, transport) = client();
        transport.reply(Err(TransportError::status(400, Some(json!({"error": "X"})))));
        let err = block_on(client.generate_report(&[pdf("a.pdf")])).unwrap_err();
        assert_eq!(err, ReportError::Api(ApiError { message: "X".into() }));

        transport.reply(Err(TransportError::status(500, None)));
        let err = block_on(client.generate_report(&[pdf("a.pdf")])).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");

        transport.reply(Err(TransportError::network("")));
        let err = block_on(client.generate_report(&[pdf("a.pdf")])).unwrap_err();
        assert_eq!(err.to_string(), "Error generating report");
    }

    #[test]
    fn test_submit_report_data_field_decodes_to_draft() {
        let (client, transport) = client();
        transport.reply(Ok(json!({"message": "Report submitted successfully", "request_id": "abc"})));
        let draft = draft();

        let response = block_on(client.submit_report(&draft, &[])).unwrap();
        assert_eq!(response.request_id, "abc");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/travel-requests/submit-report/");
        assert_eq!(calls[0].timeout, client.config().upload_timeout);

        let data: Vec<&FormPart> = calls[0].parts_named("data").collect();
        assert_eq!(data.len(), 1);
        let FormPart::Text { value, .. } = data[0] else {
            panic!("data must be a text part");
        };
        let decoded: ReportDraft = serde_json::from_str(value).unwrap();
        assert_eq!(decoded, draft);
        assert_eq!(calls[0].parts_named("files").count(), 0);
    }

    #[test]
    fn test_submit_report_attaches_validated_files() {
        let (client, transport) = client();
        transport.reply(Ok(json!({"message": "ok", "request_id": "1"})));

        block_on(client.submit_report(&draft(), &[pdf("a.pdf"), pdf("b.pdf")])).unwrap();
        assert_eq!(transport.calls()[0].parts_named("files").count(), 2);

        let bad = UploadFile::metadata_only("a.png", 5, "image/png");
        let err = block_on(client.submit_report(&draft(), &[bad])).unwrap_err();
        assert!(matches!(err, ReportError::Validation(FileValidationError::NotPdf { .. })));
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn test_submit_report_default_error_message() {
        let (client, transport) = client();
        transport.reply(Err(TransportError::network("")));
        let err = block_on(client.submit_report(&draft(), &[])).unwrap_err();
        assert_eq!(err.to_string(), "Error submitting report");
    }

    #[test]
    fn test_update_report_puts_json_body() {
        let (client, transport) = client();
        let id = "0b7a6c1e-8a53-4f4e-9a43-1f3f7f5d2c10";
        transport.reply(Ok(travel_request_json(id)));
        let draft = draft();

        let updated = block_on(client.update_report(id, &draft)).unwrap();
        assert_eq!(updated.department, "Engineering");

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(calls[0].path, format!("/travel-requests/{id}/update-report/"));
        assert_eq!(calls[0].timeout, client.config().timeout);
        let RequestBody::Json(body) = &calls[0].body else {
            panic!("expected JSON body");
        };
        assert_eq!(body, &serde_json::to_value(&draft).unwrap());
    }

    #[test]
    fn test_update_report_error_chain() {
        let (client, transport) = client();
        transport.reply(Err(TransportError::status(404, Some(json!({"error": "Travel request not found"})))));
        let err = block_on(client.update_report("1", &draft())).unwrap_err();
        assert_eq!(err.to_string(), "Travel request not found");

        transport.reply(Err(TransportError::network("")));
        let err = block_on(client.update_report("1", &draft())).unwrap_err();
        assert_eq!(err.to_string(), "Error updating report");
    }

    #[test]
    fn test_ids_are_url_encoded() {
        let (client, transport) = client();
        transport.reply(Err(TransportError::status(404, None)));
        let _ = block_on(client.get_request("a/b"));
        assert_eq!(transport.calls()[0].path, "/requests/a%2Fb/");
    }
}
