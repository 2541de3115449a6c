use contracts::domain::a001_travel_request::UploadedFileInfo;
use contracts::shared::upload::{
    has_pdf_extension, validate_upload_files_with, FileValidationError, UploadCandidate,
};

/// Файл, принятый из multipart-запроса
#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ReceivedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn info(&self) -> UploadedFileInfo {
        UploadedFileInfo {
            name: self.name.clone(),
            size: self.size(),
        }
    }
}

impl UploadCandidate for ReceivedFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn file_size(&self) -> u64 {
        self.size()
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// Серверная проверка: лимиты те же, что у клиента, но тип определяется
/// по расширению имени, а не по заявленному MIME.
pub fn validate_received_files(files: &[ReceivedFile]) -> Result<(), FileValidationError> {
    validate_upload_files_with(files, |f| has_pdf_extension(&f.name))
}
