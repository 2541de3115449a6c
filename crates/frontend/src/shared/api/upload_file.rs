use contracts::shared::upload::UploadCandidate;

/// A file selected for upload together with the metadata used for validation.
///
/// `blob` holds the browser handle; it is `None` only for metadata-only
/// values, which the browser transport refuses to send.
#[derive(Debug, Clone)]
pub struct UploadFile {
    name: String,
    size: u64,
    content_type: String,
    blob: Option<web_sys::File>,
}

impl UploadFile {
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            content_type: file.type_(),
            blob: Some(file),
        }
    }

    pub fn metadata_only(name: &str, size: u64, content_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            content_type: content_type.to_string(),
            blob: None,
        }
    }

    /// Collect all files from an `<input type="file" multiple>` selection
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self::from_web_file)
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn blob(&self) -> Option<&web_sys::File> {
        self.blob.as_ref()
    }
}

impl UploadCandidate for UploadFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn file_size(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }
}
