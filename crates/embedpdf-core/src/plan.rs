//! Multipart request planning
//!
//! A [`RequestPlan`] pairs each selected file with its multipart field role
//! and is the only input the wasm controller will build a request from.
//! Planning runs validation first, so an invalid selection can never reach
//! the network.

use crate::error::ClientError;
use crate::operation::Operation;
use crate::validation::validate_selection;

/// Multipart field for the primary document in an embed request
pub const FIELD_MAIN_PDF: &str = "main_pdf";
/// Multipart field for each document attached to the primary
pub const FIELD_FILES_TO_EMBED: &str = "files_to_embed";
/// Multipart field for the container PDF in an extract request
pub const FIELD_PDF_FILE: &str = "pdf_file";

/// One file paired with its multipart field role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: &'static str,
    /// Index into the selection the plan was built from
    pub file_index: usize,
}

/// A validated, ready-to-send request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    pub operation: Operation,
    pub endpoint: &'static str,
    pub parts: Vec<FilePart>,
}

/// Validate a selection and assign multipart roles.
///
/// Embed: the first file is `main_pdf`, the rest are `files_to_embed`.
/// Extract: the single file is `pdf_file`.
///
/// # Errors
/// Returns `ClientError::Validation` when the selection breaks the
/// operation's input rules; no plan is produced in that case.
pub fn plan_submission(
    operation: Operation,
    file_names: &[String],
) -> Result<RequestPlan, ClientError> {
    validate_selection(operation, file_names)?;

    let parts = match operation {
        Operation::Embed => {
            let mut parts = vec![FilePart {
                field: FIELD_MAIN_PDF,
                file_index: 0,
            }];
            for index in 1..file_names.len() {
                parts.push(FilePart {
                    field: FIELD_FILES_TO_EMBED,
                    file_index: index,
                });
            }
            parts
        }
        Operation::Extract => vec![FilePart {
            field: FIELD_PDF_FILE,
            file_index: 0,
        }],
    };

    Ok(RequestPlan {
        operation,
        endpoint: operation.endpoint(),
        parts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_produces_no_plan() {
        assert!(plan_submission(Operation::Embed, &[]).is_err());
        assert!(plan_submission(Operation::Extract, &[]).is_err());
    }

    #[test]
    fn test_embed_roles_first_file_as_primary() {
        let plan = plan_submission(Operation::Embed, &names(&["main.pdf", "a.pdf", "b.pdf"]))
            .expect("valid selection");

        assert_eq!(plan.endpoint, "/api/embed");
        assert_eq!(
            plan.parts,
            vec![
                FilePart {
                    field: FIELD_MAIN_PDF,
                    file_index: 0
                },
                FilePart {
                    field: FIELD_FILES_TO_EMBED,
                    file_index: 1
                },
                FilePart {
                    field: FIELD_FILES_TO_EMBED,
                    file_index: 2
                },
            ]
        );
    }

    #[test]
    fn test_embed_single_file_has_no_attachments() {
        let plan = plan_submission(Operation::Embed, &names(&["only.pdf"])).expect("valid");
        assert_eq!(plan.parts.len(), 1);
        assert_eq!(plan.parts[0].field, FIELD_MAIN_PDF);
    }

    #[test]
    fn test_extract_uses_single_pdf_file_field() {
        let plan = plan_submission(Operation::Extract, &names(&["container.pdf"])).expect("valid");
        assert_eq!(plan.endpoint, "/api/extract");
        assert_eq!(
            plan.parts,
            vec![FilePart {
                field: FIELD_PDF_FILE,
                file_index: 0
            }]
        );
    }

    #[test]
    fn test_invalid_extension_produces_no_plan() {
        let result = plan_submission(Operation::Embed, &names(&["a.pdf", "b.txt"]));
        assert!(result.is_err());
    }
}
