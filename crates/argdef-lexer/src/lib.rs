//! Token classification for `argdef`
//!
//! This does not know about any definition.  [`Token::classify`] tells flags from values and
//! [`Tokens`] hands them out one at a time, allowing a token to be pushed back to the front
//! (e.g. the `5` in `-t5`).
//!
//! ## Example
//!
//! ```rust
//! use argdef_lexer::Token;
//! use argdef_lexer::Tokens;
//!
//! let mut tokens = Tokens::new(["-vt5", "file"]);
//! let raw = tokens.next_token().unwrap();
//! let Token::Shorts(mut shorts) = Token::classify(&raw) else { unreachable!() };
//! assert_eq!(shorts.next_flag(), Some(("v", "t5")));
//! assert_eq!(shorts.next_flag(), Some(("t", "5")));
//! tokens.push_front("5");
//! assert_eq!(tokens.next_token().as_deref(), Some("5"));
//! assert_eq!(tokens.next_token().as_deref(), Some("file"));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

use std::collections::VecDeque;

/// Ordered argument tokens that can grow at the front while being consumed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    queue: VecDeque<String>,
}

impl Tokens {
    /// Queue up `raw` in order
    pub fn new<I, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            queue: raw.into_iter().map(Into::into).collect(),
        }
    }

    /// Take the next token
    pub fn next_token(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Make `token` the very next one returned by [`Tokens::next_token`]
    pub fn push_front(&mut self, token: impl Into<String>) {
        self.queue.push_front(token.into());
    }
}

/// What a single argument looks like, before consulting any definition
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// `-` on its own
    EmptyShort,
    /// `--` on its own
    EmptyLong,
    /// `--name`, holding `name`
    Long(&'a str),
    /// `-abc`: one flag per character
    Shorts(Shorts<'a>),
    /// Anything not starting with `-`
    Value(&'a str),
}

impl<'a> Token<'a> {
    /// Classify `raw` by its leading dashes
    pub fn classify(raw: &'a str) -> Self {
        if let Some(long) = raw.strip_prefix("--") {
            if long.is_empty() {
                Self::EmptyLong
            } else {
                Self::Long(long)
            }
        } else if let Some(cluster) = raw.strip_prefix('-') {
            if cluster.is_empty() {
                Self::EmptyShort
            } else {
                Self::Shorts(Shorts::new(cluster))
            }
        } else {
            Self::Value(raw)
        }
    }
}

/// Walks a cluster of short flags (`-abc`) one character at a time
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shorts<'a> {
    cluster: &'a str,
    pos: usize,
}

impl<'a> Shorts<'a> {
    fn new(cluster: &'a str) -> Self {
        Self { cluster, pos: 0 }
    }

    /// The next flag along with everything after it in the cluster
    ///
    /// Flags are whole characters, so non-ASCII flags are never split.
    pub fn next_flag(&mut self) -> Option<(&'a str, &'a str)> {
        let rest = &self.cluster[self.pos..];
        let c = rest.chars().next()?;
        let end = self.pos + c.len_utf8();
        let flag = &self.cluster[self.pos..end];
        self.pos = end;
        Some((flag, &self.cluster[end..]))
    }

    /// The whole cluster, without the leading `-`
    pub fn as_str(&self) -> &'a str {
        self.cluster
    }
}
