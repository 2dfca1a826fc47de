//! Select inputs with a free-text "other" option.

/// Select value that switches a choice to its free-text companion field.
pub const OTHER_VALUE: &str = "기타";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Preset(String),
    Other(String),
}

impl Default for Choice {
    fn default() -> Self {
        Choice::Preset(String::new())
    }
}

impl Choice {
    /// Builds a choice from a select value and its optional custom text.
    /// `기타` or `other` (any case) selects the custom text.
    pub fn from_select(value: &str, custom: Option<&str>) -> Self {
        let value = value.trim();
        if value == OTHER_VALUE || value.eq_ignore_ascii_case("other") {
            Choice::Other(custom.unwrap_or_default().trim().to_string())
        } else {
            Choice::Preset(value.to_string())
        }
    }

    /// Effective value the speech is written for.
    pub fn value(&self) -> &str {
        match self {
            Choice::Preset(v) | Choice::Other(v) => v,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }

    /// Wire pair: (`<name>`, select value) and (`<name>-etc`, custom text).
    pub fn encode(&self, name: &str) -> [(String, String); 2] {
        let etc = format!("{}-etc", name);
        match self {
            Choice::Preset(v) => [(name.to_string(), v.clone()), (etc, String::new())],
            Choice::Other(v) => [(name.to_string(), OTHER_VALUE.to_string()), (etc, v.clone())],
        }
    }
}
