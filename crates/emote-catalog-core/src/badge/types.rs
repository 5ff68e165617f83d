use serde::{Deserialize, Serialize};

use crate::emote::EmoteUrl;

/// A cosmetic badge and the identities wearing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tooltip: String,
    #[serde(default)]
    pub urls: Vec<EmoteUrl>,
    /// Numeric user ids or literal handles
    #[serde(default)]
    pub users: Vec<String>,
}

impl Badge {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tooltip: String::new(),
            urls: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add wearers
    pub fn with_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users.extend(users.into_iter().map(Into::into));
        self
    }
}

/// Key a badge wearer is indexed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identity {
    Id(i64),
    Handle(String),
}

impl Identity {
    /// Numeric id from the leading integer, the literal handle otherwise
    ///
    /// Leading whitespace and one sign are accepted and trailing text is ignored,
    /// so `"12ab"` is id 12 and `"-5"` is id -5. Strings without leading digits,
    /// or whose digits overflow `i64`, stay handles.
    pub fn parse(raw: &str) -> Self {
        match leading_integer(raw) {
            Some(id) => Self::Id(id),
            None => Self::Handle(raw.to_string()),
        }
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    // at most one sign
    if trimmed.len() - unsigned.len() > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let sign_len = trimmed.len() - unsigned.len();
    trimmed[..sign_len + digits].parse().ok()
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Handle(handle) => write!(f, "{}", handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_numeric() {
        assert_eq!(Identity::parse("123"), Identity::Id(123));
        assert_eq!(Identity::parse("abc"), Identity::Handle("abc".into()));
        assert_eq!(Identity::parse("abc12"), Identity::Handle("abc12".into()));
        assert_eq!(Identity::parse(""), Identity::Handle(String::new()));
    }

    #[test]
    fn identity_reads_leading_integer() {
        assert_eq!(Identity::parse("12ab"), Identity::Id(12));
        assert_eq!(Identity::parse("  42 "), Identity::Id(42));
        assert_eq!(Identity::parse("7.9"), Identity::Id(7));
        assert_eq!(Identity::parse("007"), Identity::Id(7));
    }

    #[test]
    fn identity_accepts_one_sign() {
        assert_eq!(Identity::parse("-5"), Identity::Id(-5));
        assert_eq!(Identity::parse("+5x"), Identity::Id(5));
        assert_eq!(Identity::parse("-"), Identity::Handle("-".into()));
        assert_eq!(Identity::parse("--5"), Identity::Handle("--5".into()));
        assert_eq!(Identity::parse("+-5"), Identity::Handle("+-5".into()));
    }

    #[test]
    fn identity_overflow_stays_handle() {
        let raw = "99999999999999999999";
        assert_eq!(Identity::parse(raw), Identity::Handle(raw.into()));
    }

    #[test]
    fn badge_deserialize_defaults() {
        let badge: Badge = serde_json::from_str(r#"{"id":"b1","name":"Supporter"}"#).unwrap();
        assert!(badge.users.is_empty());
        assert!(badge.tooltip.is_empty());
    }
}
