/// The smallest threshold the consensus reconstructor accepts. A threshold of
/// one describes a constant polynomial, which every share trivially explains.
pub const MIN_THRESHOLD: usize = 2;

/// Bytes of randomness drawn for each non-constant dealer coefficient.
pub const DEALER_COEFFICIENT_SIZE: usize = 16;

/// Prefix of the labels the dealer assigns, followed by the share's `x`.
pub const SHARE_LABEL_PREFIX: &str = "share-";
