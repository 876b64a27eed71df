//! Decoding seam for quoted strings and variable interpolation.
//!
//! The metacommand core never unquotes or interpolates anything itself; it
//! sequences calls to an injected [`Decoder`]. Concrete decoders live with
//! the variable store and are parameterized at construction by the current
//! user identity, an exec-context flag, and a [`Vars`] lookup table.

use std::collections::HashMap;

/// Variable lookup table consulted by decoders during interpolation.
pub type Vars = HashMap<String, String>;

/// Decodes one raw parameter token: strips quoting and interpolates
/// variables.
///
/// Failures (malformed quoting, unresolved variables) are opaque to the
/// metacommand core and propagate unchanged to the dispatcher.
pub trait Decoder {
    /// Decode a single raw token.
    fn decode(&self, token: &str) -> anyhow::Result<String>;
}

impl<F> Decoder for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn decode(&self, token: &str) -> anyhow::Result<String> {
        self(token)
    }
}

/// Passthrough decoder for contexts where no interpolation applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopDecoder;

impl Decoder for NopDecoder {
    fn decode(&self, token: &str) -> anyhow::Result<String> {
        Ok(token.to_owned())
    }
}
