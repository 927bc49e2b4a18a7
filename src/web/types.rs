// src/web/types.rs
//! Response types of the editor API

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rocket::http::{ContentType, Header, Status};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{Request, Response};

use crate::error::EditorError;
use crate::notification::Notification;
use crate::view::{Element, Node};

/// Id of the element wrapping the whole form
pub const FORM_PANE_ID: &str = "form-pane";
/// Id of the element wrapping the preview page
pub const PREVIEW_PANE_ID: &str = "preview-pane";
/// Response header carrying a toast on file downloads
pub const TOAST_HEADER: &str = "X-Editor-Toast";

/// Left as-is in `filename*`; everything else is percent-encoded
const FILENAME_SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Replace the inner HTML of element `target` with `html`
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ViewPatch {
    pub target: String,
    pub html: String,
}

impl ViewPatch {
    /// Swap the children of an element that carries its own id
    pub fn children_of(element: &Element) -> Self {
        Self {
            target: element.get_attr("id").unwrap_or_default().to_string(),
            html: element.inner_html(),
        }
    }

    pub fn form(form: &Element) -> Self {
        Self {
            target: FORM_PANE_ID.to_string(),
            html: form.to_html(),
        }
    }

    pub fn preview(preview: &Node) -> Self {
        Self {
            target: PREVIEW_PANE_ID.to_string(),
            html: preview.to_html(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct EditorResponse {
    pub success: bool,
    pub patches: Vec<ViewPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<Notification>,
}

impl EditorResponse {
    pub fn new(patches: Vec<ViewPatch>) -> Self {
        Self {
            success: true,
            patches,
            toast: None,
        }
    }

    pub fn with_toast(mut self, toast: Notification) -> Self {
        self.toast = Some(toast);
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<Notification>,
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
            toast: None,
        }
    }
}

/// Error body plus the status it is sent with
#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub body: StandardErrorResponse,
}

impl ApiError {
    pub fn new(status: Status, error: impl Into<String>, code: &str) -> Self {
        Self {
            status,
            body: StandardErrorResponse::new(error.into(), code.to_string(), Vec::new()),
        }
    }

    pub fn unknown_section(slug: &str) -> Self {
        let mut error = Self::new(
            Status::NotFound,
            format!("Unknown section: {}", slug),
            "UNKNOWN_SECTION",
        );
        error.body.suggestions = vec![
            "Use one of: experience, education, soft-skills, technical-skills, certifications"
                .to_string(),
        ];
        error
    }

    pub fn unsupported_value(kind: &str, value: &str, allowed: &str) -> Self {
        let mut error = Self::new(
            Status::UnprocessableEntity,
            format!("Unsupported {}: {}", kind, value),
            "UNSUPPORTED_VALUE",
        );
        error.body.suggestions = vec![format!("Use {}", allowed)];
        error
    }
}

impl From<EditorError> for ApiError {
    fn from(err: EditorError) -> Self {
        let (status, toast) = match &err {
            EditorError::ParseFailed(_) => {
                (Status::UnprocessableEntity, Some(Notification::import_failed()))
            }
            EditorError::IndexOutOfRange { .. }
            | EditorError::ItemOutOfRange { .. }
            | EditorError::NoNestedItems(_) => (Status::NotFound, None),
            EditorError::ExportInProgress => (Status::Conflict, Some(Notification::pdf_busy())),
            EditorError::RenderFailed(_) => (Status::BadGateway, Some(Notification::pdf_failed())),
        };

        let mut api_error = Self::new(status, err.to_string(), err.code());
        api_error.body.toast = toast;
        api_error
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}

/// Non-ASCII escaped as `\uXXXX`, so the JSON fits in a header value
pub fn ascii_json<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_string(value).unwrap_or_default();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

/// `Content-Disposition` for a download. Header values travel as bytes that
/// browsers read as latin-1, so the exact name goes in `filename*` and
/// `filename` only carries an ASCII stand-in.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        utf8_percent_encode(filename, FILENAME_SAFE)
    )
}

/// File offered as a download
pub struct FileDownload {
    pub data: Vec<u8>,
    pub content_type: ContentType,
    pub filename: String,
    pub toast: Option<Notification>,
}

impl FileDownload {
    pub fn pdf(data: Vec<u8>, filename: String) -> Self {
        Self {
            data,
            content_type: ContentType::PDF,
            filename,
            toast: None,
        }
    }

    pub fn json(text: String, filename: String) -> Self {
        Self {
            data: text.into_bytes(),
            content_type: ContentType::JSON,
            filename,
            toast: None,
        }
    }

    pub fn with_toast(mut self, toast: Notification) -> Self {
        self.toast = Some(toast);
        self
    }
}

impl<'r> Responder<'r, 'static> for FileDownload {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let mut response = binding
            .header(self.content_type)
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .raw_header("Content-Disposition", content_disposition(&self.filename));

        if let Some(toast) = self.toast {
            response = response.header(Header::new(TOAST_HEADER, ascii_json(&toast)));
        }

        response.ok()
    }
}
