//! Position-tracked reading of metacommand parameters.

use crate::env::Decoder;

use super::error::Result;

/// A position-tracking reader over a metacommand's raw argument tokens.
///
/// The token stream is caller-owned and never mutated; the cursor advances
/// over it, decoding quoted strings and variable references through the
/// injected [`Decoder`] where requested. Exhaustion is signalled with
/// `None` rather than an error, so metacommands with optional trailing
/// arguments read until absence.
pub struct ParamCursor<'a, D: Decoder + ?Sized> {
    tokens: &'a [String],
    pos: usize,
    decoder: &'a D,
}

impl<'a, D: Decoder + ?Sized> ParamCursor<'a, D> {
    /// Create a cursor at the start of `tokens`.
    pub fn new(tokens: &'a [String], decoder: &'a D) -> Self {
        Self {
            tokens,
            pos: 0,
            decoder,
        }
    }

    /// The next parameter, decoded when `interpolate`.
    pub fn get(&mut self, interpolate: bool) -> Result<Option<String>> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        let value = if interpolate {
            self.decoder.decode(token)?
        } else {
            token.clone()
        };
        Ok(Some(value))
    }

    /// The next parameter as an optional flag: `(true, value)` with the
    /// leading `-` stripped when the decoded value starts with one,
    /// `(false, value)` otherwise.
    pub fn get_optional(&mut self, interpolate: bool) -> Result<Option<(bool, String)>> {
        let Some(value) = self.get(interpolate)? else {
            return Ok(None);
        };
        Ok(Some(match value.strip_prefix('-') {
            Some(rest) => (true, rest.to_owned()),
            None => (false, value),
        }))
    }

    /// Drain and decode every remaining parameter, in order.
    pub fn get_all(&mut self, interpolate: bool) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(self.tokens.len().saturating_sub(self.pos));
        while let Some(value) = self.get(interpolate)? {
            values.push(value);
        }
        Ok(values)
    }

    /// The literal remaining tokens joined by single spaces, with no
    /// decoding or interpolation; drains the cursor.
    ///
    /// Used by metacommands that need raw text, such as file paths or
    /// embedded SQL fragments.
    pub fn get_raw(&mut self) -> String {
        let raw = self.tokens[self.pos..].join(" ");
        self.pos = self.tokens.len();
        raw
    }
}
