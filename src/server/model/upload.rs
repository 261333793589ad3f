/// File received from a multipart request.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    /// Original file name as sent by the browser
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
