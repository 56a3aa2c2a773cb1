/// Roman numeral tables and conversions.
///
/// This module holds the fixed lookup tables shared by every evaluation: the
/// ten canonical spellings accepted as input operands, and the thirteen
/// descending `(value, symbol)` pairs used to render results. All tables are
/// constants, so concurrent callers read them without synchronization.
pub mod roman;

/// Logging setup for the command line binary.
///
/// The library only emits `tracing` events; installing a subscriber is left
/// to the binary, which calls into this module once at startup.
pub mod logger;
