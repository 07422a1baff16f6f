//! Engine configuration
//!
//! Code length (L) and color count (K) are fixed when an engine is built.

use super::EngineError;

/// Upper bound on K^L accepted by [`EngineConfig::new`]
///
/// The whole space is materialized on every reset, so it has to fit in memory.
pub const MAX_SPACE_SIZE: usize = 1 << 24;

/// Validated code length and color count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    code_length: usize,
    colors: usize,
}

impl EngineConfig {
    /// Classic Mastermind: 4 pegs
    pub const DEFAULT_CODE_LENGTH: usize = 4;
    /// Classic Mastermind: 6 colors
    pub const DEFAULT_COLORS: usize = 6;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfiguration` if:
    /// - `code_length` or `colors` is zero
    /// - `colors` does not fit in a `u8` color index
    /// - the code space K^L is larger than [`MAX_SPACE_SIZE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::EngineConfig;
    ///
    /// let config = EngineConfig::new(4, 6).unwrap();
    /// assert_eq!(config.space_size(), 1296);
    ///
    /// assert!(EngineConfig::new(0, 6).is_err());
    /// assert!(EngineConfig::new(4, 0).is_err());
    /// ```
    pub fn new(code_length: usize, colors: usize) -> Result<Self, EngineError> {
        let invalid = EngineError::InvalidConfiguration {
            code_length,
            colors,
        };

        if code_length == 0 || colors == 0 || colors > usize::from(u8::MAX) {
            return Err(invalid);
        }

        let exponent = u32::try_from(code_length).map_err(|_| invalid.clone())?;
        match colors.checked_pow(exponent) {
            Some(size) if size <= MAX_SPACE_SIZE => Ok(Self {
                code_length,
                colors,
            }),
            _ => Err(invalid),
        }
    }

    /// Number of pegs in every code (L)
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number of available colors (K)
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    /// Size of the full code space, K^L
    #[must_use]
    pub fn space_size(&self) -> usize {
        // Cannot overflow: checked in `new`
        (0..self.code_length).fold(1, |acc, _| acc * self.colors)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            code_length: Self::DEFAULT_CODE_LENGTH,
            colors: Self::DEFAULT_COLORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = EngineConfig::default();
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.colors(), 6);
        assert_eq!(config.space_size(), 1296);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            EngineConfig::new(0, 6),
            Err(EngineError::InvalidConfiguration {
                code_length: 0,
                colors: 6
            })
        ));
        assert!(matches!(
            EngineConfig::new(4, 0),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn rejects_too_many_colors() {
        assert!(EngineConfig::new(1, 255).is_ok());
        assert!(EngineConfig::new(1, 256).is_err());
    }

    #[test]
    fn rejects_oversized_space() {
        // 10^8 codes
        assert!(EngineConfig::new(8, 10).is_err());
        // Overflows usize outright
        assert!(EngineConfig::new(200, 200).is_err());
    }

    #[test]
    fn single_color_space() {
        let config = EngineConfig::new(5, 1).unwrap();
        assert_eq!(config.space_size(), 1);
    }
}
