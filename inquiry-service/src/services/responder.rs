//! Keyword-matching inquiry responder.
//!
//! Maps a normalized query to one of a fixed set of canned messages via
//! ordered substring containment checks. The first matching rule wins; a
//! query that matches no rule gets the generic acknowledgment.

use serde::Serialize;

/// Response category surfaced to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Info,
}

/// A matched (or fallback) canned reply.
#[derive(Debug, Clone, Copy)]
pub struct CannedReply {
    pub message: &'static str,
    pub category: Category,
}

/// One keyword rule: matches when any keyword occurs as a substring.
struct KeywordRule {
    keywords: &'static [&'static str],
    message: &'static str,
}

const SERVICES_MESSAGE: &str = "Enders Consulting offers a range of services including strategic planning, technology integration, and operational improvement. How can we help you specifically?";
const CONTACT_MESSAGE: &str = "You can contact us via email at contact@endersconsulting.cloud or call us at (555) 123-4567.";
const ABOUT_MESSAGE: &str = "Founded on the principles of innovation and excellence, Enders Consulting is dedicated to helping businesses navigate complex challenges and achieve sustainable growth.";
const GREETING_MESSAGE: &str =
    "Hello! Thank you for reaching out. How can I assist you today?";
const FALLBACK_MESSAGE: &str = "Thank you for your inquiry. While I'm a simple AI, a human representative will review your question and get back to you shortly.";

/// Normalize a raw query for matching: trim whitespace and lower-case.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Inquiry responder holding the ordered rule list.
pub struct InquiryResponder {
    rules: Vec<KeywordRule>,
}

impl InquiryResponder {
    /// Construct the responder with the standard consulting rule set.
    pub fn with_default_rules() -> Self {
        Self {
            rules: vec![
                KeywordRule {
                    keywords: &["services"],
                    message: SERVICES_MESSAGE,
                },
                KeywordRule {
                    keywords: &["contact"],
                    message: CONTACT_MESSAGE,
                },
                KeywordRule {
                    keywords: &["about"],
                    message: ABOUT_MESSAGE,
                },
                KeywordRule {
                    keywords: &["hello", "hi"],
                    message: GREETING_MESSAGE,
                },
            ],
        }
    }

    /// Match a normalized query against the rules, first match wins.
    ///
    /// The query must already be normalized via [`normalize_query`];
    /// matching is pure substring search, no tokenization.
    pub fn respond(&self, query: &str) -> CannedReply {
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| query.contains(kw)) {
                return CannedReply {
                    message: rule.message,
                    category: Category::Success,
                };
            }
        }

        CannedReply {
            message: FALLBACK_MESSAGE,
            category: Category::Info,
        }
    }
}
