//! Grid parameters and their validation.

use std::fmt;

use crate::geom::{Index, IndexRange};

/// Default number of angular columns.
pub const DEFAULT_K: usize = 128;
/// Default number of radial rings.
pub const DEFAULT_H: usize = 24;
/// Default inner radius.
pub const DEFAULT_INNER: f64 = 7.0;
/// Default outer radius.
pub const DEFAULT_OUTER: f64 = 10.0;
/// Largest accepted node count `H * K`.
pub const MAX_NODES: usize = 1 << 24;

/// Parameters of a half-annulus grid: `k` angular columns spanning 180°,
/// `h` rings from radius `inner` to radius `outer`.
///
/// Passed by value into every computation; nothing caches a previous set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    pub k: usize,
    pub h: usize,
    pub inner: f64,
    pub outer: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            h: DEFAULT_H,
            inner: DEFAULT_INNER,
            outer: DEFAULT_OUTER,
        }
    }
}

impl Params {
    /// Create a parameter set. No validation happens here; see
    /// [`validate`](Self::validate).
    pub const fn new(k: usize, h: usize, inner: f64, outer: f64) -> Self {
        Self { k, h, inner, outer }
    }

    /// Check `k >= 2`, `h >= 2`, `h * k <= MAX_NODES` and `outer > inner > 0`.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.k < 2 {
            return Err(ParamError::TooFewAngular(self.k));
        }
        if self.h < 2 {
            return Err(ParamError::TooFewRadial(self.h));
        }
        match self.h.checked_mul(self.k) {
            Some(n) if n <= MAX_NODES => {}
            _ => return Err(ParamError::TooLarge { h: self.h, k: self.k }),
        }
        // Negated comparisons so NaN is rejected too.
        if !(self.inner > 0.0) || !self.inner.is_finite() {
            return Err(ParamError::NonPositiveInner(self.inner));
        }
        if !(self.outer > self.inner) || !self.outer.is_finite() {
            return Err(ParamError::RadiiOutOfOrder {
                inner: self.inner,
                outer: self.outer,
            });
        }
        Ok(())
    }

    /// The index rectangle covered by these parameters.
    #[inline]
    pub const fn range(&self) -> IndexRange {
        IndexRange::new(self.h, self.k)
    }

    /// Outermost ring, first angular column.
    #[inline]
    pub const fn source(&self) -> Index {
        Index::new(self.h.saturating_sub(1), 0)
    }

    /// Outermost ring, last angular column.
    #[inline]
    pub const fn destination(&self) -> Index {
        Index::new(self.h.saturating_sub(1), self.k.saturating_sub(1))
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "K={} H={} I={} O={}",
            self.k, self.h, self.inner, self.outer
        )
    }
}

/// Reasons a parameter set is rejected before any computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Fewer than two angular columns.
    TooFewAngular(usize),
    /// Fewer than two radial rings.
    TooFewRadial(usize),
    /// More than [`MAX_NODES`] nodes, or `h * k` overflows.
    TooLarge { h: usize, k: usize },
    /// Inner radius is zero, negative or not finite.
    NonPositiveInner(f64),
    /// Outer radius does not exceed the inner radius.
    RadiiOutOfOrder { inner: f64, outer: f64 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewAngular(k) => write!(f, "invalid parameters: K must be at least 2, got {k}"),
            Self::TooFewRadial(h) => write!(f, "invalid parameters: H must be at least 2, got {h}"),
            Self::TooLarge { h, k } => write!(
                f,
                "invalid parameters: H*K must not exceed {MAX_NODES} nodes, got H={h} K={k}"
            ),
            Self::NonPositiveInner(i) => {
                write!(f, "invalid parameters: inner radius must be positive, got {i}")
            }
            Self::RadiiOutOfOrder { inner, outer } => write!(
                f,
                "invalid parameters: outer radius {outer} must exceed inner radius {inner}"
            ),
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let p = Params::default();
        assert_eq!((p.k, p.h), (128, 24));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_small_counts() {
        assert_eq!(
            Params::new(1, 4, 1.0, 2.0).validate(),
            Err(ParamError::TooFewAngular(1))
        );
        assert_eq!(
            Params::new(4, 0, 1.0, 2.0).validate(),
            Err(ParamError::TooFewRadial(0))
        );
    }

    #[test]
    fn rejects_oversized_grids() {
        assert_eq!(
            Params::new(usize::MAX / 2, 4, 1.0, 2.0).validate(),
            Err(ParamError::TooLarge {
                h: 4,
                k: usize::MAX / 2
            })
        );
        assert!(matches!(
            Params::new(MAX_NODES, 2, 1.0, 2.0).validate(),
            Err(ParamError::TooLarge { .. })
        ));
        assert!(Params::new(MAX_NODES / 2, 2, 1.0, 2.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_radii() {
        assert_eq!(
            Params::new(4, 4, 0.0, 2.0).validate(),
            Err(ParamError::NonPositiveInner(0.0))
        );
        assert!(matches!(
            Params::new(4, 4, 2.0, 2.0).validate(),
            Err(ParamError::RadiiOutOfOrder { .. })
        ));
        assert!(matches!(
            Params::new(4, 4, 3.0, 2.0).validate(),
            Err(ParamError::RadiiOutOfOrder { .. })
        ));
        assert!(Params::new(4, 4, f64::NAN, 2.0).validate().is_err());
        assert!(Params::new(4, 4, 1.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn endpoints_sit_on_outer_ring() {
        let p = Params::new(4, 3, 1.0, 2.0);
        assert_eq!(p.source(), Index::new(2, 0));
        assert_eq!(p.destination(), Index::new(2, 3));
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let msg = ParamError::TooFewRadial(1).to_string();
        assert!(msg.contains("H must be at least 2"));
    }
}
