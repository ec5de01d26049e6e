use serde::Serialize;
use tracing::{debug, debug_span};

use crate::scan::{steps, Step};

/// Primary and secondary Double Metaphone codes of one word.
///
/// Both codes are drawn from `A..=Z` plus `0` for the "th" sound. They are
/// not truncated; see [`Codes::truncated`] for the classic four-symbol form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Codes {
    pub primary: String,
    pub secondary: String,
}

/// Encode one word into its primary and secondary codes.
///
/// ```
/// use dmeta_core::double_metaphone;
///
/// let codes = double_metaphone("Schmidt");
/// assert_eq!(codes.primary, "XMT");
/// assert_eq!(codes.secondary, "SMT");
/// ```
pub fn double_metaphone(word: impl AsRef<[u8]>) -> Codes {
    let word = word.as_ref();
    let _span = debug_span!("double_metaphone", bytes = word.len()).entered();

    let mut step_count = 0usize;
    let codes: Codes = steps(word).inspect(|_| step_count += 1).collect();

    debug!(
        primary = %codes.primary,
        secondary = %codes.secondary,
        steps = step_count
    );
    codes
}

impl FromIterator<Step> for Codes {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        let mut codes = Codes::default();
        for step in iter {
            if let Some(p) = step.primary {
                codes.primary.push_str(p);
            }
            if let Some(s) = step.secondary {
                codes.secondary.push_str(s);
            }
        }
        codes
    }
}

impl Codes {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Both codes cut to at most `max_len` symbols.
    pub fn truncated(&self, max_len: usize) -> Codes {
        // Codes are ASCII, so byte and symbol counts agree.
        Codes {
            primary: self.primary[..self.primary.len().min(max_len)].to_string(),
            secondary: self.secondary[..self.secondary.len().min(max_len)].to_string(),
        }
    }

    /// True when any non-empty code of `self` equals any non-empty code of
    /// `other`.
    pub fn matches(&self, other: &Codes) -> bool {
        let ours = [self.primary.as_str(), self.secondary.as_str()];
        let theirs = [other.primary.as_str(), other.secondary.as_str()];
        ours.iter()
            .filter(|c| !c.is_empty())
            .any(|c| theirs.contains(c))
    }

    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

impl From<Codes> for (String, String) {
    fn from(codes: Codes) -> Self {
        codes.into_pair()
    }
}
