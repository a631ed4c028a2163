//! Model call error types.

/// Errors from a model call. Generation entry points log these and return an
/// empty question list instead of propagating them.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    ApiAuth(String),
    #[error("API error: {0}")]
    ApiMessage(String),
    #[error("Model returned no text content")]
    EmptyResponse,
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Map async-openai or API errors into GenerateError.
pub fn map_api_error<E>(e: E) -> GenerateError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("401") && (s.contains("cookie auth") || s.contains("No auth credentials")) {
        return GenerateError::ApiAuth(
            "API error (401): no auth credentials found. Check OPENROUTER_API_KEY in .env or run `quizgen config set-api-key`.".to_string(),
        );
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return GenerateError::ApiMessage(msg.to_string());
    }
    GenerateError::Other(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_401_cookie_auth() {
        let e = std::io::Error::other("401 and cookie auth");
        let err = map_api_error(e);
        match &err {
            GenerateError::ApiAuth(msg) => {
                assert!(msg.contains("OPENROUTER_API_KEY"));
            }
            _ => panic!("expected ApiAuth, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_json_message() {
        let e = std::io::Error::other(r#"{"error":{"message":"Rate limit exceeded"}}"#);
        let err = map_api_error(e);
        match &err {
            GenerateError::ApiMessage(msg) => assert_eq!(msg, "Rate limit exceeded"),
            _ => panic!("expected ApiMessage, got {:?}", err),
        }
        assert_eq!(err.to_string(), "API error: Rate limit exceeded");
    }

    #[test]
    fn map_api_error_generic() {
        let e = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = map_api_error(e);
        match &err {
            GenerateError::Other(_) => assert_eq!(err.to_string(), "connection refused"),
            _ => panic!("expected Other, got {:?}", err),
        }
    }
}
