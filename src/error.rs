//! Error types for chain operations

/// Errors that can occur during chain operations
///
/// Structural operations on well-formed chains always succeed; the only hard
/// failure is addressing a position the chain does not reach. Non-fatal
/// conditions (detaching a live successor, deleting a missing link) are
/// reported as warnings, not errors.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// Insertion position is beyond the chain's current end
    #[cfg_attr(
        feature = "std",
        error("Position {index} is beyond the chain end (length {len})")
    )]
    PositionOutOfRange {
        /// The requested insertion position.
        index: usize,
        /// The chain length at the time of the attempt.
        len: usize,
    },
}
