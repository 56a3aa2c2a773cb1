use logos::Logos;

/// Represents a lexical token in an expression.
///
/// Whitespace is skipped between tokens. Any character not covered here makes
/// the lexer yield an error, which the parser reports as a malformed
/// expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'a> {
    /// A run of operand characters: decimal digits and the Roman letters
    /// `I`, `V` and `X`, such as `7`, `VII` or the invalid `V1`.
    #[regex(r"[0-9IVX]+", |lex| lex.slice())]
    Numeral(&'a str),
    /// One of the operator symbols `+`, `-`, `*` or `/`.
    #[regex(r"[+\-*/]", |lex| lex.slice())]
    Operator(&'a str),
}
