//! Result rendering
//!
//! Renders an [`ApiResult`] into the form's result area. Success wraps the
//! payload in a blob, mints an object URL, and builds a download link (plus an
//! inline iframe preview when the browser can render the payload). Failure
//! renders the formatted error text with its line breaks intact.
//!
//! Object URLs are never revoked; they stay valid until the page unloads.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlElement, Url};

use embedpdf_core::{error_message, format_bytes, ApiResult, ClientError, Operation, PayloadKind};

use crate::controller::js_detail;

/// Render the outcome of one submission into the result container
pub fn render_result(container: &HtmlElement, operation: Operation, result: &ApiResult) {
    match result {
        ApiResult::Success { bytes, kind } => {
            if let Err(err) = render_success(container, operation, bytes, *kind) {
                let fallback = ClientError::Transport(format!(
                    "Failed to display result: {}",
                    js_detail(&err)
                ));
                render_failure(container, &fallback);
            }
        }
        ApiResult::Failure(failure) => {
            render_failure(container, &ClientError::Api(failure.clone()));
        }
    }
}

/// Text for the download link; ZIP downloads carry a human-readable size
fn download_label(operation: Operation, byte_len: usize) -> String {
    match operation.result_kind() {
        PayloadKind::Pdf => format!("Download {}", operation.download_name()),
        PayloadKind::Zip => format!(
            "Download {} ({})",
            operation.download_name(),
            format_bytes(byte_len)
        ),
    }
}

fn render_success(
    container: &HtmlElement,
    operation: Operation,
    bytes: &[u8],
    kind: PayloadKind,
) -> Result<(), JsValue> {
    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("Container is detached from a document"))?;
    let url = object_url(bytes, kind)?;

    container.set_inner_html("");

    let wrapper = document.create_element("div")?;
    wrapper.set_class_name("success-message");

    let banner = document.create_element("p")?;
    banner.set_text_content(Some(operation.success_banner()));
    wrapper.append_child(&banner)?;

    if kind.browser_renderable() {
        let preview = create_preview(&document, &url)?;
        wrapper.append_child(&preview)?;
    }

    let link = document.create_element("a")?;
    link.set_class_name("download-btn");
    link.set_attribute("href", &url)?;
    link.set_attribute("download", operation.download_name())?;
    link.set_text_content(Some(&download_label(operation, bytes.len())));
    wrapper.append_child(&link)?;

    container.append_child(&wrapper)?;
    Ok(())
}

/// Render a failure message; `inner_text` keeps the hint's line break
pub fn render_failure(container: &HtmlElement, err: &ClientError) {
    container.set_inner_html("");
    let Some(document) = container.owner_document() else {
        return;
    };
    let Ok(div) = document.create_element("div") else {
        return;
    };
    div.set_class_name("error-message");
    if let Some(element) = div.dyn_ref::<HtmlElement>() {
        element.set_inner_text(&error_message(err));
    }
    let _ = container.append_child(&div);
}

/// Wrap payload bytes in a blob and mint a page-scoped object URL
fn object_url(bytes: &[u8], kind: PayloadKind) -> Result<String, JsValue> {
    let array = Uint8Array::from(bytes);
    let parts = Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type(kind.mime_type());

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

fn create_preview(document: &Document, url: &str) -> Result<web_sys::Element, JsValue> {
    let preview = document.create_element("iframe")?;
    preview.set_class_name("pdf-preview");
    preview.set_attribute("src", url)?;
    preview.set_attribute("title", "Result preview")?;
    Ok(preview)
}
