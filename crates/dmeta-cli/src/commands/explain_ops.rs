use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use dmeta_core::{steps, Codes};

#[derive(Debug, Serialize)]
pub struct ExplainStep {
    pub start: usize,
    pub len: usize,
    /// Input text consumed by the step.
    pub source: String,
    pub primary: Option<&'static str>,
    pub secondary: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub word: String,
    pub slavo_germanic: bool,
    pub steps: Vec<ExplainStep>,
    pub codes: Codes,
}

/// Run the scan over `word`, keeping every step.
pub fn explain(word: &str) -> ExplainResult {
    let bytes = word.as_bytes();
    let iter = steps(bytes);
    let slavo_germanic = iter.word().is_slavo_germanic();

    let mut explained = Vec::new();
    let mut codes = Codes::default();
    for step in iter {
        codes.primary.push_str(step.primary.unwrap_or(""));
        codes.secondary.push_str(step.secondary.unwrap_or(""));
        explained.push(ExplainStep {
            start: step.start,
            len: step.len,
            source: String::from_utf8_lossy(&bytes[step.start..step.end()]).into_owned(),
            primary: step.primary,
            secondary: step.secondary,
        });
    }

    ExplainResult {
        word: word.to_string(),
        slavo_germanic,
        steps: explained,
        codes,
    }
}

pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Steps for \"{}\" ({} bytes, slavo-germanic: {}) ===\n",
        result.word,
        result.word.len(),
        if result.slavo_germanic { "yes" } else { "no" },
    ));

    if result.steps.is_empty() {
        out.push_str("  (no steps)\n");
    }
    for step in &result.steps {
        let range = format!("[{},{})", step.start, step.start + step.len);
        let pad_width = 6;
        let display_width = UnicodeWidthStr::width(step.source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", step.source, " ".repeat(pad_width - display_width))
        } else {
            step.source.clone()
        };
        out.push_str(&format!(
            "  {:<8} {} primary={:<4} secondary={}\n",
            range,
            padded,
            step.primary.unwrap_or("-"),
            step.secondary.unwrap_or("-"),
        ));
    }

    out.push_str(&format!(
        "\n  primary:   {}\n  secondary: {}\n",
        result.codes.primary, result.codes.secondary
    ));
    out
}

pub fn explain_cmd(word: &str, json: bool) {
    let result = explain(word);
    if json {
        let line = die!(
            serde_json::to_string_pretty(&result),
            "JSON serialization failed: {}"
        );
        println!("{line}");
    } else {
        print!("{}", format_text(&result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_schmidt() {
        let r = explain("Schmidt");
        assert!(!r.slavo_germanic);
        assert_eq!(r.codes.primary, "XMT");
        assert_eq!(r.codes.secondary, "SMT");
        let sources: Vec<&str> = r.steps.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["Sch", "m", "i", "dt"]);
        assert_eq!(r.steps[0].primary, Some("X"));
        assert_eq!(r.steps[0].secondary, Some("S"));
        assert_eq!(r.steps[2].primary, None);
    }

    #[test]
    fn test_explain_latin_letter() {
        let r = explain("Niño");
        let sources: Vec<&str> = r.steps.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["N", "i", "ñ", "o"]);
        assert_eq!(r.codes.primary, "NN");
    }

    #[test]
    fn test_explain_slavo_germanic() {
        assert!(explain("Jankelowicz").slavo_germanic);
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&explain("Smith"));
        assert!(text.starts_with("=== Steps for \"Smith\" (5 bytes, slavo-germanic: no) ==="));
        assert!(text.contains("[3,5)"));
        assert!(text.contains("primary:   SM0"));
        assert!(text.contains("secondary: XMT"));
    }

    #[test]
    fn test_format_text_empty() {
        let text = format_text(&explain(""));
        assert!(text.contains("(no steps)"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(explain("Knight")).unwrap();
        assert_eq!(value["codes"]["primary"], "NT");
        assert_eq!(value["steps"][0]["primary"], serde_json::Value::Null);
        assert_eq!(value["steps"][0]["source"], "K");
    }
}
