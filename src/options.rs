//! Configuration for tokenizing and parsing.
//!
//! The defaults are the strict settings. `ParseOptions::compatible()`
//! reproduces the looser behaviour older callers relied on: trailing
//! tokens after the top-level value are ignored and string values keep
//! their escape sequences literally.

use crate::{DEFAULT_MAX_DEPTH, MAX_JSON_SIZE_BYTES};

/// Limits and behaviour switches for a single parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum source size in bytes. Checked before scanning starts.
    pub max_input_size: usize,
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
    /// Ignore anything after the first complete value instead of failing.
    pub allow_trailing_tokens: bool,
    /// Turn `\n`, `\"` etc. into the characters they denote when building
    /// string values and object keys.
    pub decode_escapes: bool,
}

impl ParseOptions {
    /// Strict defaults.
    pub const fn strict() -> Self {
        ParseOptions {
            max_input_size: MAX_JSON_SIZE_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_tokens: false,
            decode_escapes: true,
        }
    }

    /// Trailing tokens ignored, escapes kept literally. The depth and size
    /// limits stay in place.
    pub const fn compatible() -> Self {
        ParseOptions {
            allow_trailing_tokens: true,
            decode_escapes: false,
            ..Self::strict()
        }
    }

    /// Sets `max_depth`.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets `max_input_size`.
    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    /// Sets `allow_trailing_tokens`.
    pub const fn with_trailing_tokens(mut self, allow: bool) -> Self {
        self.allow_trailing_tokens = allow;
        self
    }

    /// Sets `decode_escapes`.
    pub const fn with_decoded_escapes(mut self, decode: bool) -> Self {
        self.decode_escapes = decode;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}
