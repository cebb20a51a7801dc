use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("cannot start a booking without a selected destination")]
    NoDestinationSelected,
    #[error("booking dialog is not awaiting authentication")]
    NotAuthenticating,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no Gemini API key configured")]
    MissingCredential,
    #[error("invalid Gemini endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode Gemini response: {0}")]
    Decode(String),
}
