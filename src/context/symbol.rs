//! Noise symbols and their allocator
//!
//! Symbols are totally ordered and only ever handed out in increasing order, so
//! the term lists of any two ranges can be merged with a single ordered pass.

use std::cell::Cell;
use std::fmt;

/// Identifier of one independent source of uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u64);

impl Symbol {
    /// Creates a symbol from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the symbol.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Monotonic symbol counter
///
/// Interior mutability keeps allocation available through `&Context`, while
/// `Cell` makes the allocator `!Sync`: a context cannot be shared between
/// threads without the caller wrapping it in its own lock.
#[derive(Debug, Default)]
pub(crate) struct SymbolAllocator {
    next: Cell<u64>,
}

impl SymbolAllocator {
    pub(crate) fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Returns a symbol greater than every symbol returned before.
    pub(crate) fn next_symbol(&self) -> Symbol {
        let id = self.next.get();
        self.next.set(id + 1);
        Symbol(id)
    }

    /// Number of symbols issued since creation or the last reset.
    pub(crate) fn issued(&self) -> u64 {
        self.next.get()
    }

    pub(crate) fn reset(&mut self) {
        self.next.set(0);
    }
}
