//! Directive classification.
//!
//! The scanner hands us the raw text found between `<%` and `%>`; the first
//! non-whitespace character decides the directive kind:
//!
//! ```text
//!     -   escaped expression      <%- user_input %>
//!     =   raw expression          <%= name %>
//!     @   preprocessor command    <%@ param int count %>
//!     (anything else)             statement, character kept in the content
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Escaped,
    Raw,
    Preprocessor,
    Statement,
}

/// One directive, alive only for the duration of its dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub content: String,
}

/// Split the raw directive text into modifier kind and trimmed content.
pub fn classify(raw: &str) -> Directive {
    let rest = raw.trim_start();
    let (kind, rest) = match rest.bytes().next() {
        Some(b'-') => (DirectiveKind::Escaped, &rest[1..]),
        Some(b'=') => (DirectiveKind::Raw, &rest[1..]),
        Some(b'@') => (DirectiveKind::Preprocessor, &rest[1..]),
        _ => (DirectiveKind::Statement, rest),
    };
    Directive {
        kind,
        content: rest.trim().to_string(),
    }
}
