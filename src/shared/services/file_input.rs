//! Reads the images picked in the search bar's `<input type="file">`

use dioxus::prelude::*;

use crate::domain::services::SearchSession;

/// Read the files currently selected in `<input type="file" id={input_id}>`,
/// convert them, and attach them to the session. The input is reset
/// afterwards so the same file can be picked again.
#[cfg(target_arch = "wasm32")]
pub async fn add_files_from_input(input_id: &str, mut session: Signal<SearchSession>) {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    use crate::domain::services::{FileCandidate, process_batch};

    let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        tracing::warn!("File input {} not found", input_id);
        return;
    };

    let Some(files) = input.files() else {
        return;
    };

    let candidates: Vec<FileCandidate<web_sys::File>> = (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| FileCandidate {
            filename: file.name(),
            media_type: file.type_(),
            handle: file,
        })
        .collect();

    if candidates.is_empty() {
        return;
    }

    session.write().begin_upload();
    let outcome = process_batch(candidates, read_file_bytes).await;
    session.write().finish_upload(outcome);

    input.set_value("");
}

#[cfg(target_arch = "wasm32")]
async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, String> {
    use wasm_bindgen_futures::JsFuture;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Server-side stub (no-op)
#[cfg(not(target_arch = "wasm32"))]
pub async fn add_files_from_input(_input_id: &str, _session: Signal<SearchSession>) {
    tracing::warn!("File selection only available in browser");
}
