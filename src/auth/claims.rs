use serde::{Deserialize, Serialize};

/// Claims carried by tokens the external identity provider issues.
///
/// The server never mints these; `sub` is the opaque user identifier every
/// ownership check runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
impl Claims {
    pub fn for_tests(sub: &str) -> Self {
        let now = chrono::Utc::now().timestamp() as usize;
        Self {
            sub: sub.to_string(),
            email: Some(format!("{}@example.com", sub)),
            iat: now,
            exp: now + 3600,
        }
    }
}
