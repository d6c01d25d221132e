//! Search session tokens.
//!
//! A session token groups the keystrokes of one search session for provider
//! billing. It stays constant while the user types and is replaced after every
//! commit.

use rand::distr::Alphanumeric;
use rand::Rng;

const RANDOM_SUFFIX_LEN: usize = 16;

/// Opaque per-session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh token: base36 milliseconds plus a random suffix.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(char::from)
            .collect();
        SessionToken(format!("{}-{}", to_base36(millis), suffix))
    }

    /// Generates a token guaranteed to differ from `self`.
    pub fn regenerate(&self) -> Self {
        loop {
            let next = Self::generate();
            if next != *self {
                return next;
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
