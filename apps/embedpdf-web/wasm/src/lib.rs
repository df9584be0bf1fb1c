//! WASM bindings for the PDF embed/extract form handler
//!
//! This crate wires browser forms to the submission pipeline in
//! `embedpdf-core`. All decisions live in Rust; JavaScript only loads the
//! module and names the elements to bind.
//!
//! ## Architecture
//!
//! - Validation, request planning, and response decoding in `embedpdf-core`
//! - Submission control (busy/idle transitions, fetch) in [`controller`]
//! - Result rendering (blob URLs, preview, download link) in [`render`]
//! - Element references are resolved once at registration and injected into
//!   the controller; nothing queries the document per submission
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { OperationKind, register_form } from './pkg/embedpdf_wasm.js';
//!
//! await init();
//!
//! register_form(OperationKind.Embed, "embed-form", "embed-files", "embed-submit", "embed-result");
//! register_form(OperationKind.Extract, "extract-form", "extract-file", "extract-submit", "extract-result");
//! ```

pub mod controller;
pub mod render;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement};

use controller::FormHandles;
use embedpdf_core::Operation;

/// Operation selector exposed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Combine a primary PDF with attachment PDFs into one container file
    Embed,
    /// Recover embedded documents from a container PDF as a ZIP archive
    Extract,
}

impl From<OperationKind> for Operation {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Embed => Operation::Embed,
            OperationKind::Extract => Operation::Extract,
        }
    }
}

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"EmbedPDF WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format bytes as human-readable string
#[wasm_bindgen]
pub fn format_bytes(bytes: usize) -> String {
    embedpdf_core::format_bytes(bytes)
}

/// Wire a form to the submission pipeline.
///
/// Looks up the form, file input, submit button, and result container once,
/// then attaches a single `submit` listener that runs the async pipeline.
///
/// # Errors
/// Returns a JsValue error if any element is missing or has the wrong type.
#[wasm_bindgen]
pub fn register_form(
    operation: OperationKind,
    form_id: &str,
    input_id: &str,
    button_id: &str,
    result_id: &str,
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object available"))?;

    let form: HtmlFormElement = lookup(&document, form_id)?;
    let handles = FormHandles {
        operation: operation.into(),
        input: lookup(&document, input_id)?,
        button: lookup(&document, button_id)?,
        result: lookup(&document, result_id)?,
    };

    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        let handles = handles.clone();
        wasm_bindgen_futures::spawn_local(async move {
            handles.submit().await;
        });
    });

    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    // Registered once for the page's lifetime, so the closure is never dropped.
    listener.forget();

    Ok(())
}

/// Find an element by id and cast it to the expected type
fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has unexpected type", id)))
}
