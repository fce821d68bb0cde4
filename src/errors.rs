use crate::locale::Locale;
use axum::http::StatusCode;
use thiserror::Error;

/// Input rejected before anything is sent to the habit service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("habit name is blank")]
    BlankHabitName,
    #[error("habit is not in the current list")]
    UnknownHabit,
    #[error("date is not YYYY-MM-DD")]
    BadDate,
    #[error("date cannot be written in the display offset")]
    DateOutOfRange,
}

impl Invalid {
    pub fn message(self, locale: Locale) -> &'static str {
        let texts = locale.texts();
        match self {
            Self::MissingCredentials => texts.missing_credentials,
            Self::PasswordMismatch => texts.password_mismatch,
            Self::BlankHabitName => texts.blank_habit_name,
            Self::UnknownHabit => texts.unknown_habit,
            Self::BadDate => texts.bad_date,
            Self::DateOutOfRange => texts.date_out_of_range,
        }
    }
}

/// Failures of a call made on the user's behalf.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the habit service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response from the habit service: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] Invalid),
}

impl ClientError {
    /// Text shown in the page notification. Server messages are passed through as sent.
    pub fn user_message(&self, locale: Locale) -> String {
        let texts = locale.texts();
        match self {
            Self::Network(_) => texts.service_unreachable.to_string(),
            Self::Malformed(_) => texts.service_malformed.to_string(),
            Self::Rejected(message) => message.clone(),
            Self::Validation(invalid) => invalid.message(locale).to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "not logged in".to_string(),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let status = match err {
            ClientError::Rejected(_) | ClientError::Validation(_) => StatusCode::BAD_REQUEST,
            ClientError::Network(_) | ClientError::Malformed(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.user_message(Locale::En),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_keeps_server_message() {
        let err = ClientError::Rejected("Email already registered".to_string());
        assert_eq!(err.user_message(Locale::Pl), "Email already registered");
        let app: AppError = err.into();
        assert_eq!(app.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_error_maps_to_bad_gateway() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = ClientError::from(parse).into();
        assert_eq!(app.status, StatusCode::BAD_GATEWAY);
        assert!(!app.message.is_empty());
    }

    #[test]
    fn validation_messages_follow_locale() {
        let err = ClientError::from(Invalid::PasswordMismatch);
        assert_eq!(err.user_message(Locale::En), "Passwords do not match.");
        assert_eq!(err.user_message(Locale::Pl), "Hasła nie są identyczne.");
        let app: AppError = err.into();
        assert_eq!(app.status, StatusCode::BAD_REQUEST);
    }
}
