use dioxus::prelude::*;

use crate::client::util::api::{ApiError, PickedFile};

/// Reads the first file of a file input change event into memory
///
/// # Returns
/// - `Ok(Some(PickedFile))`: A file was chosen
/// - `Ok(None)`: The picker was dismissed
/// - `Err(ApiError)`: The browser failed to read the file
pub async fn read_picked_file(evt: &FormEvent) -> Result<Option<PickedFile>, ApiError> {
    let Some(file) = evt.files().into_iter().next() else {
        return Ok(None);
    };

    let name = file.name();
    let content_type = file
        .content_type()
        .unwrap_or_else(|| content_type_from_name(&name).to_string());
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read {}: {}", name, e)))?;

    Ok(Some(PickedFile {
        name,
        content_type,
        bytes: bytes.to_vec(),
    }))
}

/// Content type guessed from the file extension when the browser reports none
pub fn content_type_from_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
