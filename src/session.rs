use axum::http::{header, HeaderMap, HeaderValue};

pub const TOKEN_COOKIE: &str = "habit_token";
pub const USER_COOKIE: &str = "habit_user";
const MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;

/// Credentials for the remote API, passed explicitly into every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
        }
    }

    /// Reads the session cookie pair; both must be present and non-empty.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let mut token = None;
        let mut user = None;
        for value in headers.get_all(header::COOKIE) {
            let Ok(value) = value.to_str() else {
                continue;
            };
            for pair in value.split(';') {
                let Some((name, raw)) = pair.trim().split_once('=') else {
                    continue;
                };
                let decoded = urlencoding::decode(raw.trim()).ok().map(|v| v.into_owned());
                match name.trim() {
                    TOKEN_COOKIE => token = decoded,
                    USER_COOKIE => user = decoded,
                    _ => {}
                }
            }
        }

        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() && !user.is_empty() => {
                Some(Self::new(token, user))
            }
            _ => None,
        }
    }

    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        [
            cookie(TOKEN_COOKIE, &self.access_token, MAX_AGE_SECS),
            cookie(USER_COOKIE, &self.user_id, MAX_AGE_SECS),
        ]
        .into_iter()
        .filter_map(|value| HeaderValue::from_str(&value).ok())
        .collect()
    }

    pub fn clear_cookie_headers() -> Vec<HeaderValue> {
        [cookie(TOKEN_COOKIE, "", 0), cookie(USER_COOKIE, "", 0)]
            .into_iter()
            .filter_map(|value| HeaderValue::from_str(&value).ok())
            .collect()
    }
}

fn cookie(name: &str, value: &str, max_age: u64) -> String {
    format!(
        "{name}={}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Lax",
        urlencoding::encode(value)
    )
}
