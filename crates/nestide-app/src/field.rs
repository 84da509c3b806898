//! Validating path input field
//!
//! A [`PathInputField`] holds the raw text of one path input together with
//! the rule set it is validated against and the verdict for the current
//! text. Revalidation is synchronous on every edit: validation is a bounded
//! local filesystem probe, so there is no debouncing and no window in which
//! a caller can observe a verdict that is stale with respect to the text.

use nestide_core::prelude::*;
use nestide_core::validate::{validate, PathRuleSet, Verdict};

use crate::host::FileChooser;

/// One path input, its rules and its current verdict.
#[derive(Debug, Clone)]
pub struct PathInputField {
    text: String,
    rules: PathRuleSet,
    verdict: Verdict,
}

impl PathInputField {
    /// Create a field with empty text, validated against `rules`.
    pub fn new(rules: PathRuleSet) -> Self {
        let verdict = validate("", &rules);
        Self {
            text: String::new(),
            rules,
            verdict,
        }
    }

    /// Create a field pre-populated with `text`.
    pub fn with_text(rules: PathRuleSet, text: impl Into<String>) -> Self {
        let mut field = Self::new(rules);
        field.set_text(text);
        field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rules(&self) -> &PathRuleSet {
        &self.rules
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// Replace the text and synchronously recompute the verdict.
    ///
    /// This is the sole mutation entry point; setting equal text twice is
    /// idempotent.
    pub fn set_text(&mut self, new_text: impl Into<String>) -> &Verdict {
        self.text = new_text.into();
        self.verdict = validate(&self.text, &self.rules);
        trace!(text = %self.text, valid = self.verdict.is_valid(), "revalidated path input");
        &self.verdict
    }

    /// Ask the host's file chooser for a path, starting from the current
    /// text. A chosen path goes through [`set_text`](Self::set_text);
    /// cancellation leaves the field untouched. Returns whether a path was
    /// chosen.
    pub fn browse(&mut self, chooser: &dyn FileChooser) -> bool {
        let start = std::path::Path::new(&self.text);
        match chooser.choose(start, &self.rules) {
            Some(path) => {
                self.set_text(path.to_string_lossy().into_owned());
                true
            }
            None => false,
        }
    }
}
