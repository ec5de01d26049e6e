use crate::codes::{double_metaphone, Codes};
use crate::settings::Settings;

/// Encoder with an optional cap on code length.
///
/// The core scan never truncates; this is where callers that want the
/// classic four-symbol codes set that policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    max_length: Option<usize>,
}

impl Encoder {
    /// Encoder producing full-length codes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    /// Encoder honouring `[encoding] max_length`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_length: settings.encoding.limit(),
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn encode(&self, word: impl AsRef<[u8]>) -> Codes {
        let codes = double_metaphone(word);
        match self.max_length {
            Some(max) => codes.truncated(max),
            None => codes,
        }
    }

    /// Whether `a` and `b` share a code at this encoder's length.
    pub fn is_match(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        self.encode(a).matches(&self.encode(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings_toml;

    #[test]
    fn test_full_length_by_default() {
        let codes = Encoder::new().encode("Jankelowicz");
        assert_eq!(codes.primary, "JNKLTS");
        assert_eq!(codes.secondary, "ANKLFX");
    }

    #[test]
    fn test_max_length() {
        let codes = Encoder::with_max_length(4).encode("Jankelowicz");
        assert_eq!(codes.primary, "JNKL");
        assert_eq!(codes.secondary, "ANKL");
    }

    #[test]
    fn test_from_settings() {
        let s = parse_settings_toml("[encoding]\nmax_length = 2\n[matching]\nmax_length = 4\n")
            .unwrap();
        assert_eq!(Encoder::from_settings(&s).max_length(), Some(2));

        let s = parse_settings_toml("[encoding]\nmax_length = 0\n[matching]\nmax_length = 4\n")
            .unwrap();
        assert_eq!(Encoder::from_settings(&s).max_length(), None);
    }

    #[test]
    fn test_is_match() {
        let enc = Encoder::with_max_length(4);
        assert!(enc.is_match("Smith", "Schmidt"));
        assert!(enc.is_match("Wasserman", "Vasserman"));
        assert!(enc.is_match("Arnow", "Arnoff"));
        assert!(!enc.is_match("Smith", "Jones"));
        assert!(!enc.is_match("", ""));
    }
}
