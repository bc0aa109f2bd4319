//! dynbitset - Growable Bit Set
//!
//! A set of non-negative integers stored as packed bits in a growable store of
//! 16-bit words. The store grows lazily when bits are set beyond its capacity
//! and sheds trailing zero words after set-algebra operations.
//!
//! # Architecture
//!
//! - **BitSet**: mutation, set algebra, scans, equality, hashing
//! - **Word**: bit-position arithmetic, range masks, popcount table
//! - **Iter**: lazy ascending cursor over set bits
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use dynbitset::BitSet;
//!
//! let mut bs = BitSet::new();
//! bs.set_bit(10);
//! bs.set_bit(20);
//! bs.set_bit(30);
//!
//! assert_eq!(bs.cardinality(), 3);
//! assert_eq!(bs.to_vec(), vec![10, 20, 30]);
//! ```
//!
//! ## Set Algebra
//!
//! ```
//! use dynbitset::BitSet;
//!
//! let mut c = BitSet::from_indices([1, 3, 5]);
//! let d = BitSet::from_indices([3, 5, 7]);
//!
//! c.and(&d);
//! assert_eq!(c.to_string(), "{3, 5}");
//!
//! c.or(&d);
//! assert_eq!(c.to_string(), "{3, 5, 7}");
//! ```
//!
//! # Errors
//!
//! Range operations return [`BitSetError::InvalidRange`] when `from > to` and
//! leave the set untouched. Scanning a zero word internally is a defect and
//! panics.
//!
//! # Logging
//!
//! Store growth and trimming emit `tracing` events at `trace` level. The crate
//! installs no subscriber.

// Module declarations
pub mod bitset;
pub mod error;
pub mod iter;
pub mod word;

// Re-exports for convenient access
pub use bitset::BitSet;
pub use error::{BitSetError, Result};
pub use iter::Iter;
pub use word::{Word, BITS_PER_WORD};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "dynbitset";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("dynbitset"));
        assert!(ver.contains("0.1.0"));
    }

    #[test]
    fn test_re_exports() {
        let _bs = BitSet::new();
        let _result: Result<()> = Ok(());
        assert_eq!(BITS_PER_WORD, 16);
    }
}
