//! Browser-side glue: where the backend lives and how selected files are
//! read into memory.

use brief_core::{ClientError, UploadFile};
use brief_http::{ClientConfig, HttpBackend};
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// The backend is served from the page's own origin.
pub fn api_config() -> ClientConfig {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env)
}

pub fn backend() -> Result<HttpBackend, ClientError> {
    HttpBackend::new(api_config())
}

async fn read_file(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {e:?}", file.name()))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let upload = UploadFile::new(file.name(), bytes);
    let content_type = file.type_();
    if content_type.is_empty() {
        Ok(upload)
    } else {
        Ok(upload.with_content_type(content_type))
    }
}

/// Reads every file currently selected in a file input.
pub async fn selected_files(input: &HtmlInputElement) -> Result<Vec<UploadFile>, String> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(file) = list.get(i) {
            out.push(read_file(&file).await?);
        }
    }
    Ok(out)
}
