//! L4 Atomic Layer: Validated header height

use crate::{Error, Result};

/// Height of the collapsible region. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeaderHeight(f64);

impl HeaderHeight {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidHeaderHeight(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}
