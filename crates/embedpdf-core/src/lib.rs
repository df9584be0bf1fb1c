//! Core logic for the PDF embed/extract browser client
//!
//! Everything that does not need a DOM lives here: the operation model,
//! file-selection validation, multipart request planning, response decoding,
//! and user-visible message formatting. The wasm crate in
//! `apps/embedpdf-web/wasm` binds these pieces to form events, `fetch`, and
//! blob URLs.
//!
//! ## Contract with the server
//!
//! One convention, applied to both endpoints: binary body on success, JSON
//! error envelope `{error, details?, hint?}` on failure.
//!
//! - `POST /api/embed` — multipart `main_pdf` (one file) + `files_to_embed`
//!   (zero or more). 200 returns the combined PDF.
//! - `POST /api/extract` — multipart `pdf_file` (one file). 200 returns a ZIP
//!   of the recovered documents.
//!
//! Older extract servers answer 200 with a JSON envelope carrying the archive
//! as a hex string; [`response::decode_legacy_envelope`] keeps them working.

pub mod error;
pub mod format;
pub mod operation;
pub mod plan;
pub mod response;
pub mod validation;

pub use error::{ApiFailure, ClientError};
pub use format::{error_message, format_bytes};
pub use operation::{Operation, PayloadKind};
pub use plan::{plan_submission, FilePart, RequestPlan};
pub use response::{decode_legacy_envelope, is_json_content_type, ApiResult};
pub use validation::validate_selection;
