//! Login error taxonomy.
//!
//! `Display` on [`LoginError`] is the "underlying message" appended to
//! [`crate::LOGIN_FAILED_PREFIX`], so provider errors render the same text the
//! provider's own web SDK would show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Provider-side reasons a sign-in can be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    InvalidCredential,
    InvalidEmail,
    UserDisabled,
    TooManyRequests,
    MissingPassword,
    MissingEmail,
    OperationNotAllowed,
    ApiKeyNotValid,
    InternalError,
}

impl AuthErrorCode {
    /// Map an Identity Toolkit error `message` to a code.
    ///
    /// The REST API sometimes appends detail after `" : "`
    /// (`TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account...`); only the
    /// leading token is significant.
    #[must_use]
    pub fn from_rest_message(message: &str) -> Self {
        let head = message.split(" : ").next().unwrap_or_default().trim();
        match head {
            "EMAIL_NOT_FOUND" => Self::UserNotFound,
            "INVALID_PASSWORD" => Self::WrongPassword,
            "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredential,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyRequests,
            "MISSING_PASSWORD" => Self::MissingPassword,
            "MISSING_EMAIL" => Self::MissingEmail,
            "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => Self::OperationNotAllowed,
            "API_KEY_INVALID" => Self::ApiKeyNotValid,
            other if other.starts_with("API key not valid") => Self::ApiKeyNotValid,
            _ => Self::InternalError,
        }
    }

    /// The `auth/<code>` suffix used by the provider's web SDK.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserNotFound => "user-not-found",
            Self::WrongPassword => "wrong-password",
            Self::InvalidCredential => "invalid-credential",
            Self::InvalidEmail => "invalid-email",
            Self::UserDisabled => "user-disabled",
            Self::TooManyRequests => "too-many-requests",
            Self::MissingPassword => "missing-password",
            Self::MissingEmail => "missing-email",
            Self::OperationNotAllowed => "operation-not-allowed",
            Self::ApiKeyNotValid => "api-key-not-valid",
            Self::InternalError => "internal-error",
        }
    }
}

/// Failure of one of the remote steps of a login.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The identity provider refused the credentials or the request.
    #[error("Firebase: Error (auth/{}).", .0.as_str())]
    Provider(AuthErrorCode),

    /// A request never produced a response (DNS, refused connection, CORS, ...).
    #[error("{0}")]
    Network(String),

    /// The identity provider answered with a body we could not use.
    #[error("unexpected identity provider response: {0}")]
    MalformedResponse(String),
}
