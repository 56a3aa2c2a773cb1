/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens: runs
/// of operand characters and operator symbols. Whitespace is skipped and any
/// other character is reported as a lexical error.
pub mod lexer;
/// The parser module splits the token stream into a raw expression.
///
/// The parser collects operand text on either side of the single operator
/// and rejects input that is blank, contains unknown characters, or has a
/// missing or repeated operator.
pub mod parser;
/// The validator module turns a raw expression into a checked expression.
///
/// # Responsibilities
/// - Classifies each operand as Arabic or Roman and rejects mixed notation.
/// - Converts operand text to integers.
/// - Enforces the operand bound.
pub mod validator;
/// The evaluator module computes the integer result of an expression.
pub mod evaluator;
/// The formatter module renders results in the notation of their input.
///
/// Roman results are range checked before conversion; Arabic results are
/// printed as is.
pub mod formatter;
