use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error calling {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("failed to encode request for {endpoint}: {message}")]
    Encode { endpoint: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a destination.")]
    MissingDestination,

    #[error("Number of days must be a positive whole number (got \"{0}\").")]
    InvalidDays(String),
}
