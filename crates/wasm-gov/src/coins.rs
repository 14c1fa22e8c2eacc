// Coin amounts attached to contract instantiation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coin represents a token amount. The amount stays a decimal string; this
/// crate only checks that a coin set is well formed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }

    /// Denominations follow `[a-z][a-z0-9/]{2,63}`
    pub fn has_valid_denom(&self) -> bool {
        let mut chars = self.denom.chars();
        let starts_lower = matches!(chars.next(), Some(c) if c.is_ascii_lowercase());

        starts_lower
            && (3..=64).contains(&self.denom.len())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/')
    }

    pub fn is_positive(&self) -> bool {
        !self.amount.is_empty()
            && self.amount.bytes().all(|b| b.is_ascii_digit())
            && matches!(self.amount.parse::<u128>(), Ok(n) if n > 0)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A set of coins, sorted by denomination
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Empty sets are valid. Otherwise every coin needs a valid denom and a
    /// positive amount, and denoms must be strictly ascending.
    pub fn is_valid(&self) -> bool {
        let all_valid = self.0.iter().all(|c| c.has_valid_denom() && c.is_positive());
        let sorted = self.0.windows(2).all(|pair| pair[0].denom < pair[1].denom);
        all_valid && sorted
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        f.write_str(&rendered.join(","))
    }
}
