//! File-selection validation
//!
//! Both operations accept PDF input only; validation is by file name, since
//! the browser hands us names before any bytes are read. The server validates
//! content again on its side.

use crate::error::ClientError;
use crate::operation::Operation;

/// Check a file selection against the operation's input rules.
///
/// Embed needs at least one file (the first is the primary document, the rest
/// are attached to it); Extract needs exactly one. Every file name must end in
/// `.pdf`, case-insensitively.
///
/// # Errors
/// Returns `ClientError::Validation` with a message naming the problem; for a
/// bad extension the message names the offending file.
pub fn validate_selection(operation: Operation, file_names: &[String]) -> Result<(), ClientError> {
    match operation {
        Operation::Embed => {
            if file_names.is_empty() {
                return Err(ClientError::Validation(
                    "Please select at least one PDF".to_string(),
                ));
            }
        }
        Operation::Extract => {
            if file_names.is_empty() {
                return Err(ClientError::Validation(
                    "Please select a PDF to extract from".to_string(),
                ));
            }
            if file_names.len() > 1 {
                return Err(ClientError::Validation(format!(
                    "Extract expects exactly one PDF, got {}",
                    file_names.len()
                )));
            }
        }
    }

    for name in file_names {
        if !has_pdf_extension(name) {
            return Err(ClientError::Validation(format!(
                "\"{}\" is not a PDF file",
                name
            )));
        }
    }

    Ok(())
}

fn has_pdf_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    // ".pdf" alone is not a usable file name
    lower.len() > 4 && lower.ends_with(".pdf")
}
