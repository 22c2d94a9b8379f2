/// The evaluator module executes checked programs by walking the tree.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs the integer arithmetic and comparisons, manages variable state,
/// and sends printed values to an [`Output`](evaluator::output::Output).
///
/// # Responsibilities
/// - Executes assignments, `print`, `while` and `if`.
/// - Treats zero as false and any other value as true.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a list of tokens, each
/// carrying its kind, its exact text and where it starts. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Classifies keywords, identifiers, literals, operators and punctuation.
/// - Skips whitespace while keeping line and column counts.
/// - Reports text that matches no token rule.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Expressions are parsed by precedence climbing, one function per
/// precedence tier; statements and blocks by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into declarations, assignments, `print`, `while` and
///   `if` statements.
/// - Validates the grammar, reporting errors with the offending line.
pub mod parser;
/// The semantic module enforces declaration-before-use.
///
/// It builds the [`SymbolTable`](semantic::SymbolTable) and wraps a valid
/// program in a [`CheckedProgram`](semantic::CheckedProgram), the only input
/// accepted by the back ends.
pub mod semantic;
/// Three-address code: the instruction set, the generator that lowers a
/// checked program into it, and a small machine that executes it.
pub mod tac;
