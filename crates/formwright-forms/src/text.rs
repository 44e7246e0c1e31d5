use std::fmt;

use serde::{Deserialize, Serialize};

/// Rich text as understood by the host's form renderer
///
/// Serializes to the host's raw message shape, e.g.
/// `{"rawtext":[{"text":"Age"},{"text":"\n"},{"translate":"form.error.empty"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    /// Literal text
    Text { text: String },
    /// Translation key, resolved by the host, with positional substitutions
    Translate {
        translate: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        with: Vec<String>,
    },
    /// Concatenation of several parts
    Composite { rawtext: Vec<RawText> },
}

impl RawText {
    pub fn text(text: impl Into<String>) -> Self {
        RawText::Text { text: text.into() }
    }

    pub fn translate(key: impl Into<String>) -> Self {
        RawText::Translate {
            translate: key.into(),
            with: Vec::new(),
        }
    }

    pub fn translate_with(key: impl Into<String>, with: Vec<String>) -> Self {
        RawText::Translate {
            translate: key.into(),
            with,
        }
    }

    pub fn join(parts: impl IntoIterator<Item = RawText>) -> Self {
        RawText::Composite {
            rawtext: parts.into_iter().collect(),
        }
    }

    /// Label with an inline error appended: `self + separator + error`
    ///
    /// The error is rendered as a translation key so hosts with a language
    /// table can localize it; hosts without one display the key verbatim.
    pub fn with_error(&self, separator: &str, error: &str) -> Self {
        RawText::join([
            self.clone(),
            RawText::text(separator),
            RawText::translate(error),
        ])
    }

    /// Flatten to a plain string for hosts without a translation table
    ///
    /// Translation keys are emitted as-is, with each `%s` replaced by the next
    /// substitution.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            RawText::Text { text } => out.push_str(text),
            RawText::Translate { translate, with } => {
                let mut substitutions = with.iter();
                let mut pieces = translate.split("%s").peekable();
                while let Some(piece) = pieces.next() {
                    out.push_str(piece);
                    if pieces.peek().is_some() {
                        match substitutions.next() {
                            Some(value) => out.push_str(value),
                            None => out.push_str("%s"),
                        }
                    }
                }
            }
            RawText::Composite { rawtext } => {
                for part in rawtext {
                    part.write_plain(out);
                }
            }
        }
    }
}

impl Default for RawText {
    fn default() -> Self {
        RawText::text("")
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::text(value)
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        RawText::text(value)
    }
}

impl From<&RawText> for RawText {
    fn from(value: &RawText) -> Self {
        value.clone()
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}
