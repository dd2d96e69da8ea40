use serde::{Deserialize, Serialize};

/// The error document the upstream API returns alongside non-success
/// status codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDocument {
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiErrorDocument {
    /// The first message in the document, if any.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_is_reported() {
        let doc: ApiErrorDocument =
            serde_json::from_str(r#"{ "errors": [ { "code": 1, "message": "Group is invalid or does not exist." } ] }"#)
                .unwrap();
        assert_eq!(doc.message(), Some("Group is invalid or does not exist."));
    }

    #[test]
    fn empty_document_has_no_message() {
        let doc: ApiErrorDocument = serde_json::from_str(r#"{ "errors": [] }"#).unwrap();
        assert_eq!(doc.message(), None);
    }
}
