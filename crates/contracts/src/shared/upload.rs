//! Ограничения на загрузку PDF-чеков
//!
//! Проверка выполняется на клиенте до любого сетевого запроса. Набор файлов
//! принимается или отклоняется целиком.

use thiserror::Error;

/// Максимальное количество файлов в одной загрузке
pub const MAX_UPLOAD_FILES: usize = 5;

/// Максимальный размер одного файла (10MB)
pub const MAX_UPLOAD_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Файл-кандидат на загрузку
pub trait UploadCandidate {
    fn file_name(&self) -> &str;
    fn file_size(&self) -> u64;
    /// Объявленный MIME-тип (может быть пустым)
    fn content_type(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    #[error("No files provided")]
    NoFiles,
    #[error("Maximum 5 files allowed")]
    TooManyFiles { count: usize },
    #[error("File {name} exceeds 10MB limit")]
    FileTooLarge { name: String, size: u64 },
    #[error("File {name} is not a PDF")]
    NotPdf { name: String, content_type: String },
}

impl FileValidationError {
    /// Имя файла, нарушившего ограничение
    pub fn file_name(&self) -> Option<&str> {
        match self {
            FileValidationError::FileTooLarge { name, .. }
            | FileValidationError::NotPdf { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Loose check: any declared type containing "pdf" passes.
pub fn is_pdf_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("pdf")
}

/// Имя файла оканчивается на `.pdf` (без учета регистра)
pub fn has_pdf_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

/// Проверить набор файлов перед загрузкой (тип по заявленному MIME)
pub fn validate_upload_files<F: UploadCandidate>(files: &[F]) -> Result<(), FileValidationError> {
    validate_upload_files_with(files, |f| is_pdf_content_type(f.content_type()))
}

/// Общие лимиты: количество, затем размер и тип каждого файла.
/// Как распознать PDF, решает вызывающая сторона.
pub fn validate_upload_files_with<F, P>(files: &[F], is_pdf: P) -> Result<(), FileValidationError>
where
    F: UploadCandidate,
    P: Fn(&F) -> bool,
{
    if files.is_empty() {
        return Err(FileValidationError::NoFiles);
    }
    if files.len() > MAX_UPLOAD_FILES {
        return Err(FileValidationError::TooManyFiles { count: files.len() });
    }

    for file in files {
        if file.file_size() > MAX_UPLOAD_FILE_SIZE {
            return Err(FileValidationError::FileTooLarge {
                name: file.file_name().to_string(),
                size: file.file_size(),
            });
        }
        if !is_pdf(file) {
            return Err(FileValidationError::NotPdf {
                name: file.file_name().to_string(),
                content_type: file.content_type().to_string(),
            });
        }
    }

    Ok(())
}
