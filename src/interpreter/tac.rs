/// Three-address instructions and their operands.
///
/// A flat, ordered instruction list is the intermediate representation
/// produced from a checked program.
pub mod instruction;

/// Lowering from the syntax tree to three-address code.
///
/// Allocates temporaries and labels from per-run counters.
pub mod generator;

/// Execution of three-address code.
///
/// An independent back end used to cross-check the tree-walking evaluator.
pub mod machine;

pub use generator::{Generator, generate};
pub use instruction::{Instruction, Label, Operand, TacOp, render};
pub use machine::Machine;
