/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons and the logical connectives over integers.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context (the variable environment), expression
/// evaluation and statement execution.
pub mod core;

/// Destinations for `print` output.
///
/// Execution writes printed values through the [`output::Output`] trait so
/// callers can collect them or send them to standard output.
pub mod output;
