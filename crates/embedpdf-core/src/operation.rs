//! The two form operations and their per-operation constants

/// A user-initiated form operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Combine a primary PDF with attachment PDFs into a single container file
    Embed,
    /// Recover previously embedded documents from a container PDF as a ZIP
    Extract,
}

impl Operation {
    /// API endpoint for this operation
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Embed => "/api/embed",
            Operation::Extract => "/api/extract",
        }
    }

    /// Submit-button text when the form is idle
    pub fn idle_label(&self) -> &'static str {
        match self {
            Operation::Embed => "Embed Files",
            Operation::Extract => "Extract Files",
        }
    }

    /// Submit-button text while a request is in flight
    pub fn busy_label(&self) -> &'static str {
        "Processing..."
    }

    /// Default filename for the download link
    pub fn download_name(&self) -> &'static str {
        match self {
            Operation::Embed => "combined.pdf",
            Operation::Extract => "extracted_documents.zip",
        }
    }

    /// What a successful response body contains
    pub fn result_kind(&self) -> PayloadKind {
        match self {
            Operation::Embed => PayloadKind::Pdf,
            Operation::Extract => PayloadKind::Zip,
        }
    }

    /// Banner text shown above the download link on success
    pub fn success_banner(&self) -> &'static str {
        match self {
            Operation::Embed => "✓ PDFs combined successfully!",
            Operation::Extract => "✓ Embedded documents extracted!",
        }
    }
}

/// Content kind of a successful response payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Pdf,
    Zip,
}

impl PayloadKind {
    /// MIME type used when wrapping the payload in a blob
    pub fn mime_type(&self) -> &'static str {
        match self {
            PayloadKind::Pdf => "application/pdf",
            PayloadKind::Zip => "application/zip",
        }
    }

    /// Whether the browser can render the payload inline (iframe preview)
    pub fn browser_renderable(&self) -> bool {
        matches!(self, PayloadKind::Pdf)
    }
}
