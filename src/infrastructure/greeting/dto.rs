use serde::{Deserialize, Serialize};

/// Body of a `greet` call.
#[derive(Debug, Serialize)]
pub struct GreetRequestBody<'a> {
    /// Name, verbatim.
    pub name: &'a str,
}

/// Successful `greet` response.
#[derive(Debug, Deserialize)]
pub struct GreetResponseBody {
    /// Greeting text.
    pub message: String,
}

/// Error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the service.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_keeps_name_verbatim() {
        let body = serde_json::to_string(&GreetRequestBody { name: " Ada " }).unwrap();
        assert_eq!(body, r#"{"name":" Ada "}"#);
    }
}
