/// Largest value an input operand may take.
pub const MAX_OPERAND: i64 = 10;
/// Smallest value representable as a Roman numeral.
pub const MIN_ROMAN: i64 = 1;
/// Largest value rendered as a Roman numeral (`MMMM`).
pub const MAX_ROMAN: i64 = 4000;

/// The canonical Roman spellings of every valid input operand.
///
/// Input operands are read by exact lookup in this table, so `IIII` or `VV`
/// are not accepted even though they use only valid letters.
pub const OPERAND_NUMERALS: [(&str, i64); 10] = [("I", 1),
                                                 ("II", 2),
                                                 ("III", 3),
                                                 ("IV", 4),
                                                 ("V", 5),
                                                 ("VI", 6),
                                                 ("VII", 7),
                                                 ("VIII", 8),
                                                 ("IX", 9),
                                                 ("X", 10)];

/// Roman symbols and their values, including the subtractive pairs, in
/// descending order of value.
pub const SYMBOLS: [(i64, &str); 13] = [(1000, "M"),
                                        (900, "CM"),
                                        (500, "D"),
                                        (400, "CD"),
                                        (100, "C"),
                                        (90, "XC"),
                                        (50, "L"),
                                        (40, "XL"),
                                        (10, "X"),
                                        (9, "IX"),
                                        (5, "V"),
                                        (4, "IV"),
                                        (1, "I")];

/// Returns `true` for the letters that may appear in an input operand.
///
/// ## Example
/// ```
/// use numerus::util::roman::is_roman_letter;
///
/// assert!(is_roman_letter('X'));
/// assert!(!is_roman_letter('L'));
/// assert!(!is_roman_letter('x'));
/// ```
#[must_use]
pub const fn is_roman_letter(c: char) -> bool {
    matches!(c, 'I' | 'V' | 'X')
}

/// Returns `true` if `text` contains at least one Roman letter.
///
/// Text containing any Roman letter counts as Roman, even when it also holds
/// digits; such text is later rejected as an invalid Roman numeral.
#[must_use]
pub fn is_roman(text: &str) -> bool {
    text.chars().any(is_roman_letter)
}

/// Looks up the value of a canonical Roman operand between `I` and `X`.
///
/// ## Returns
/// - `Some(value)` if `text` is exactly one of the ten canonical spellings.
/// - `None` otherwise.
///
/// ## Example
/// ```
/// use numerus::util::roman::from_roman;
///
/// assert_eq!(from_roman("VII"), Some(7));
/// assert_eq!(from_roman("IIII"), None);
/// assert_eq!(from_roman("XI"), None);
/// ```
#[must_use]
pub fn from_roman(text: &str) -> Option<i64> {
    OPERAND_NUMERALS.iter()
                    .find(|(symbol, _)| *symbol == text)
                    .map(|&(_, value)| value)
}

/// Renders `value` as a Roman numeral using the greedy subtractive
/// algorithm.
///
/// Symbols are taken from [`SYMBOLS`] largest first. Values up to 3999 get
/// their canonical spelling and 4000 becomes `MMMM`. Values below one have
/// no Roman form and render as an empty string, so callers are expected to
/// check the range first.
///
/// ## Example
/// ```
/// use numerus::util::roman::to_roman;
///
/// assert_eq!(to_roman(14), "XIV");
/// assert_eq!(to_roman(1994), "MCMXCIV");
/// assert_eq!(to_roman(4000), "MMMM");
/// assert_eq!(to_roman(0), "");
/// ```
#[must_use]
pub fn to_roman(value: i64) -> String {
    let mut remaining = value;
    let mut numeral = String::new();

    for &(weight, symbol) in &SYMBOLS {
        if remaining <= 0 {
            break;
        }
        while weight <= remaining {
            numeral.push_str(symbol);
            remaining -= weight;
        }
    }

    numeral
}
