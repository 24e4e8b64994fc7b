//! Vocabulary Configuration
//!
//! Process-wide, read-only vocabulary tables consulted by the query compiler
//! and the search pipeline. Built once at startup and shared behind an `Arc`;
//! never mutated afterwards, so concurrent reads need no synchronization.
//!
//! ## Tables
//! - **Stop-words**: per-kind terms excluded from tokenized search. Each kind
//!   ignores its own name ("housing" is a useless discriminator when every
//!   row in the housing partition matches it).
//! - **Allowed keywords**: per-kind whitelist of `keyword` values that the
//!   keyword filter will honor. Values outside the whitelist are silently
//!   dropped from filter requests.

use crate::store::types::Kind;

pub struct Vocabulary {
    stop_words: [Vec<&'static str>; 3],
    keywords: [Vec<&'static str>; 3],
}

impl Vocabulary {
    /// Builds the built-in vocabulary tables.
    pub fn builtin() -> Self {
        let mut stop_words: [Vec<&'static str>; 3] = Default::default();
        stop_words[Kind::Housing.index()] = vec!["housing"];
        stop_words[Kind::Counseling.index()] = vec!["counseling"];
        stop_words[Kind::Organizations.index()] = vec!["organization"];

        let mut keywords: [Vec<&'static str>; 3] = Default::default();
        keywords[Kind::Housing.index()] = vec![
            "housing authority",
            "supportive housing",
            "housing assistance",
            "transitional housing",
        ];
        keywords[Kind::Counseling.index()] = vec![
            "foster care counseling",
            "youth mental health counseling",
            "youth trauma therapy",
            "bilingual youth counseling",
        ];
        keywords[Kind::Organizations.index()] = vec![
            "nonprofit organization",
            "youth support organization",
            "youth volunteer organization",
            "foster care nonprofit organization",
        ];

        Self {
            stop_words,
            keywords,
        }
    }

    pub fn stop_words(&self, kind: Kind) -> &[&'static str] {
        &self.stop_words[kind.index()]
    }

    /// Checks a token against the kind's stop-word list. Comparison is on the
    /// lowercased token.
    pub fn is_stop_word(&self, kind: Kind, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.stop_words[kind.index()].iter().any(|w| *w == lowered)
    }

    pub fn allowed_keywords(&self, kind: Kind) -> &[&'static str] {
        &self.keywords[kind.index()]
    }

    /// Exact-match test against the kind's allowed keyword values.
    pub fn is_allowed_keyword(&self, kind: Kind, value: &str) -> bool {
        self.keywords[kind.index()].iter().any(|w| *w == value)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
