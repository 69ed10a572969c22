//! Computation context
//!
//! Every arithmetic entry point takes a [`Context`]. It replaces ambient global
//! state with an explicit object that owns:
//!
//! - the noise-symbol allocator,
//! - the default output precision for new ranges,
//! - the internal working precision used for deviations and error accumulation,
//! - the mixed interval/affine refinement mode.
//!
//! # Example
//!
//! ```rust
//! use affine_rs::context::{Context, ContextConfig, MixedMode};
//!
//! let config = ContextConfig {
//!     precision: 24,
//!     internal_precision: 128,
//!     mixed: MixedMode::Intersect,
//! };
//! let ctx = Context::with_config(config).unwrap();
//!
//! let a = ctx.next_symbol();
//! let b = ctx.next_symbol();
//! assert!(b > a);
//! ```

mod symbol;

pub use symbol::Symbol;
use symbol::SymbolAllocator;

use crate::error::RangeError;

// =================================================================================================
// Configuration
// =================================================================================================

/// How operators combine their affine enclosure with the interval enclosure
/// computed independently on the operands' true ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixedMode {
    /// Keep the pure affine enclosure
    Off,

    /// Intersect the affine and interval enclosures
    Intersect,

    /// Intersect, then give back the slack of the operation's own error term
    #[default]
    Trimmed,
}

/// Precision and refinement settings of a [`Context`]
///
/// # Examples
///
/// ```rust
/// use affine_rs::context::ContextConfig;
///
/// let config = ContextConfig::default();
/// assert_eq!(config.precision, 53);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    /// Default precision (bits) of ranges created through the context, such as
    /// [`Range::zero`](crate::range::Range::zero)
    pub precision: u32,

    /// Working precision (bits) of deviations, radii and error accumulators
    pub internal_precision: u32,

    /// Mixed interval/affine refinement applied by the operators
    pub mixed: MixedMode,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            precision: 53,
            internal_precision: 256,
            mixed: MixedMode::default(),
        }
    }
}

impl ContextConfig {
    /// Validate that both precisions are usable
    pub fn validate(&self) -> Result<(), RangeError> {
        validate_precision(self.precision)?;
        validate_precision(self.internal_precision)?;
        if self.internal_precision < self.precision {
            return Err(RangeError::InternalPrecisionTooLow {
                internal: self.internal_precision,
                precision: self.precision,
            });
        }
        Ok(())
    }
}

/// Check a precision against the bounds MPFR supports.
pub fn validate_precision(precision: u32) -> Result<(), RangeError> {
    let min = rug::float::prec_min();
    let max = rug::float::prec_max();
    if precision < min || precision > max {
        return Err(RangeError::InvalidPrecision { precision, min, max });
    }
    Ok(())
}

// =================================================================================================
// Context
// =================================================================================================

/// Explicit owner of the symbol allocator and precision settings
#[derive(Debug)]
pub struct Context {
    symbols: SymbolAllocator,
    config: ContextConfig,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context with the default configuration
    pub fn new() -> Self {
        Self {
            symbols: SymbolAllocator::new(),
            config: ContextConfig::default(),
        }
    }

    /// Create a context from a validated configuration
    pub fn with_config(config: ContextConfig) -> Result<Self, RangeError> {
        config.validate()?;
        log::debug!(
            "context created: precision {} bits, internal {} bits, mixed {:?}",
            config.precision,
            config.internal_precision,
            config.mixed
        );
        Ok(Self {
            symbols: SymbolAllocator::new(),
            config,
        })
    }

    /// Draw a fresh noise symbol
    pub fn next_symbol(&self) -> Symbol {
        self.symbols.next_symbol()
    }

    /// Number of symbols drawn so far
    pub fn symbols_issued(&self) -> u64 {
        self.symbols.issued()
    }

    /// Restart symbol numbering.
    ///
    /// Ranges created before the reset must not be combined with ranges created
    /// after it: their symbols would collide.
    pub fn reset_symbols(&mut self) {
        self.symbols.reset();
    }

    /// Default output precision
    pub fn precision(&self) -> u32 {
        self.config.precision
    }

    /// Internal working precision
    pub fn internal_precision(&self) -> u32 {
        self.config.internal_precision
    }

    /// Mixed refinement mode
    pub fn mixed_mode(&self) -> MixedMode {
        self.config.mixed
    }

    /// Current configuration
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
