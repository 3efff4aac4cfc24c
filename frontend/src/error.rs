use thiserror::Error;

/// Failures of a call to the contacts API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Unexpected content type: {0}")]
    UnexpectedFormat(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Client-side form validation failures. The message is shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and phone number are required.")]
    MissingRequiredFields,
}
