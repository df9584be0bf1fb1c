//! Submission controller
//!
//! Turns a user-initiated form submission into one validated API call with
//! busy/idle UI transitions. Element references are injected at registration
//! time, so the controller never touches global document state.
//!
//! Per form, at most one request is ever outstanding: the submit button is
//! disabled for the whole flight, and re-enabled unconditionally once the
//! outcome is known. There is no cancellation or timeout; a hung request
//! leaves the form in its processing state.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    File, FormData, HtmlButtonElement, HtmlElement, HtmlInputElement, Request, RequestInit,
    Response,
};

use embedpdf_core::{
    decode_legacy_envelope, is_json_content_type, plan_submission, ApiFailure, ApiResult,
    ClientError, Operation, RequestPlan,
};

use crate::render::render_result;

/// Element references for one form, resolved once at registration
#[derive(Clone)]
pub struct FormHandles {
    pub operation: Operation,
    pub input: HtmlInputElement,
    pub button: HtmlButtonElement,
    pub result: HtmlElement,
}

/// One in-flight submission: the validated plan plus the files it indexes
struct PendingOperation {
    plan: RequestPlan,
    files: Vec<File>,
}

impl FormHandles {
    /// Run the full submission pipeline for the current file selection.
    ///
    /// Order: validate/plan, busy transition, request, response decoding,
    /// idle restoration, render. The restoration step runs unconditionally
    /// after the fallible section, so the button is re-enabled on success,
    /// transport failure, and API failure alike.
    pub async fn submit(&self) {
        let files = self.selected_files();
        let names: Vec<String> = files.iter().map(|f| f.name()).collect();

        // A rejected selection renders immediately; nothing was sent and the
        // form never left its idle state.
        let plan = match plan_submission(self.operation, &names) {
            Ok(plan) => plan,
            Err(err) => {
                render_result(&self.result, self.operation, &err.into());
                return;
            }
        };

        let pending = PendingOperation { plan, files };

        self.start_processing();
        let outcome = self.send(&pending).await;
        self.finish_processing();

        let result = outcome.unwrap_or_else(ApiResult::from);
        render_result(&self.result, self.operation, &result);
    }

    /// Snapshot the file input's current selection
    fn selected_files(&self) -> Vec<File> {
        let mut files = Vec::new();
        if let Some(list) = self.input.files() {
            for index in 0..list.length() {
                if let Some(file) = list.get(index) {
                    files.push(file);
                }
            }
        }
        files
    }

    /// Disable the trigger, set the busy label, clear any prior result
    fn start_processing(&self) {
        self.button.set_disabled(true);
        self.button
            .set_text_content(Some(self.operation.busy_label()));
        self.result.set_inner_html("");
    }

    /// Restore the trigger to its idle state
    fn finish_processing(&self) {
        self.button.set_disabled(false);
        self.button
            .set_text_content(Some(self.operation.idle_label()));
    }

    /// Build the multipart body from the plan and issue exactly one request
    async fn send(&self, pending: &PendingOperation) -> Result<ApiResult, ClientError> {
        let form_data =
            FormData::new().map_err(|e| js_error("Failed to build form data", &e))?;
        for part in &pending.plan.parts {
            let file = &pending.files[part.file_index];
            form_data
                .append_with_blob_and_filename(part.field, file, &file.name())
                .map_err(|e| js_error("Failed to attach file", &e))?;
        }

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(form_data.as_ref());

        let request = Request::new_with_str_and_init(pending.plan.endpoint, &opts)
            .map_err(|e| js_error("Failed to build request", &e))?;

        let window =
            web_sys::window().ok_or_else(|| ClientError::Transport("No window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("Request failed", &e))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| js_error("Unexpected fetch result", &e))?;

        self.decode_response(pending.plan.operation, &response)
            .await
    }

    /// Turn the HTTP response into an ApiResult
    async fn decode_response(
        &self,
        operation: Operation,
        response: &Response,
    ) -> Result<ApiResult, ClientError> {
        if !response.ok() {
            let body = response_text(response).await.unwrap_or_default();
            return Ok(ApiResult::Failure(ApiFailure::parse(
                response.status(),
                &response.status_text(),
                &body,
            )));
        }

        let content_type = response.headers().get("Content-Type").ok().flatten();
        if is_json_content_type(content_type.as_deref()) {
            // Older extract servers wrap the archive in a JSON hex envelope
            let body = response_text(response).await?;
            let bytes = decode_legacy_envelope(&body)?;
            return Ok(ApiResult::Success {
                bytes,
                kind: operation.result_kind(),
            });
        }

        let promise = response
            .array_buffer()
            .map_err(|e| js_error("Failed to read response body", &e))?;
        let buffer = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("Failed to read response body", &e))?;
        let bytes = Uint8Array::new(&buffer).to_vec();

        Ok(ApiResult::Success {
            bytes,
            kind: operation.result_kind(),
        })
    }
}

/// Read a response body as text
async fn response_text(response: &Response) -> Result<String, ClientError> {
    let promise = response
        .text()
        .map_err(|e| js_error("Failed to read response body", &e))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("Failed to read response body", &e))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Best-effort string form of a JavaScript error value
pub(crate) fn js_detail(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(context: &str, value: &JsValue) -> ClientError {
    ClientError::Transport(format!("{}: {}", context, js_detail(value)))
}

// WASM-specific tests that run in a browser environment
#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_handles(operation: Operation) -> FormHandles {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        let button: HtmlButtonElement = document
            .create_element("button")
            .unwrap()
            .dyn_into()
            .unwrap();
        button.set_text_content(Some(operation.idle_label()));
        let result: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();

        FormHandles {
            operation,
            input,
            button,
            result,
        }
    }

    #[wasm_bindgen_test]
    fn test_busy_transition_disables_button() {
        let handles = test_handles(Operation::Embed);
        handles.start_processing();
        assert!(handles.button.disabled());
        assert_eq!(
            handles.button.text_content().unwrap(),
            Operation::Embed.busy_label()
        );
    }

    #[wasm_bindgen_test]
    fn test_idle_restoration_after_busy() {
        let handles = test_handles(Operation::Extract);
        handles.start_processing();
        handles.finish_processing();
        assert!(!handles.button.disabled());
        assert_eq!(
            handles.button.text_content().unwrap(),
            Operation::Extract.idle_label()
        );
    }

    #[wasm_bindgen_test]
    fn test_restoration_is_idempotent() {
        let handles = test_handles(Operation::Embed);
        handles.finish_processing();
        handles.finish_processing();
        assert!(!handles.button.disabled());
        assert_eq!(
            handles.button.text_content().unwrap(),
            Operation::Embed.idle_label()
        );
    }

    #[wasm_bindgen_test]
    fn test_busy_transition_clears_prior_result() {
        let handles = test_handles(Operation::Embed);
        handles.result.set_inner_html("<p>old result</p>");
        handles.start_processing();
        assert_eq!(handles.result.inner_html(), "");
    }

    #[wasm_bindgen_test]
    async fn test_empty_selection_renders_error_without_busy_transition() {
        let handles = test_handles(Operation::Embed);
        handles.submit().await;
        // Validation failed before any transition, so the button stayed idle
        assert!(!handles.button.disabled());
        let text = handles.result.text_content().unwrap_or_default();
        assert!(text.contains("Please select at least one PDF"));
    }
}
