//! The generated pre-shared key placeholder.

use std::{fmt, iter, str::FromStr};

use rand::{Rng, distr::Alphanumeric};

use crate::error::{Error, Result};

/// Number of characters in every generated token.
pub const TOKEN_LEN: usize = 63;

/// A 63 character alphanumeric token.
///
/// Every character is drawn independently and uniformly from
/// `[A-Za-z0-9]`. The value never changes once created; a header that
/// already holds one is never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PskToken(String);

impl PskToken {
    /// Sample a new token from the given random source.
    ///
    /// Pass a seeded generator for reproducible output:
    ///
    /// ```
    /// use iop_psk_core::PskToken;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let a = PskToken::generate(&mut StdRng::seed_from_u64(7));
    /// let b = PskToken::generate(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
            .take(TOKEN_LEN)
            .collect();
        Self(token)
    }

    /// Sample a new token from the thread-local generator.
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Validate an existing token.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = s
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric());
        if let Some((position, ch)) = invalid {
            return Err(Box::new(Error::TokenCharset { ch, position }));
        }
        // All ASCII from here, so bytes == chars
        if s.len() != TOKEN_LEN {
            return Err(Box::new(Error::TokenLength {
                expected: TOKEN_LEN,
                found: s.len(),
            }));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PskToken {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PskToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
