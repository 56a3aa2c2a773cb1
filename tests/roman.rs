use numerus::{
    ast::{Expression, Notation, Operator},
    util::roman::{
        MAX_ROMAN, OPERAND_NUMERALS, SYMBOLS, from_roman, is_roman, is_roman_letter, to_roman,
    },
};

#[test]
fn operand_table_round_trips() {
    for n in 1..=10 {
        assert_eq!(from_roman(&to_roman(n)), Some(n), "{n}");
    }
    for (symbol, value) in OPERAND_NUMERALS {
        assert_eq!(to_roman(value), symbol);
    }
}

#[test]
fn values_above_ten_are_not_operands() {
    for n in 11..=MAX_ROMAN {
        assert_eq!(from_roman(&to_roman(n)), None, "{n}");
    }
}

#[test]
fn symbols_are_strictly_descending() {
    assert!(SYMBOLS.windows(2).all(|pair| pair[0].0 > pair[1].0));
    assert_eq!(SYMBOLS.first(), Some(&(1000, "M")));
    assert_eq!(SYMBOLS.last(), Some(&(1, "I")));
}

#[test]
fn canonical_rendering() {
    let cases = [(1, "I"),
                 (4, "IV"),
                 (9, "IX"),
                 (14, "XIV"),
                 (40, "XL"),
                 (90, "XC"),
                 (100, "C"),
                 (400, "CD"),
                 (444, "CDXLIV"),
                 (900, "CM"),
                 (1994, "MCMXCIV"),
                 (2024, "MMXXIV"),
                 (3999, "MMMCMXCIX"),
                 (4000, "MMMM")];
    for (value, numeral) in cases {
        assert_eq!(to_roman(value), numeral, "{value}");
    }
}

#[test]
fn rendered_numerals_sum_back_to_their_value() {
    for n in 1..=MAX_ROMAN {
        let numeral = to_roman(n);
        let mut rest = numeral.as_str();
        let mut total = 0;
        for (weight, symbol) in SYMBOLS {
            while let Some(tail) = rest.strip_prefix(symbol) {
                total += weight;
                rest = tail;
            }
        }
        assert!(rest.is_empty(), "{n} rendered as {numeral}");
        assert_eq!(total, n, "{n} rendered as {numeral}");
    }
}

#[test]
fn non_positive_values_render_empty() {
    assert_eq!(to_roman(0), "");
    assert_eq!(to_roman(-5), "");
}

#[test]
fn classification_uses_only_i_v_x() {
    assert!(is_roman("VII"));
    assert!(is_roman("7I"));
    assert!(!is_roman("7"));
    assert!(!is_roman(""));
    assert!(!is_roman("MCD"));
    for c in ['L', 'C', 'D', 'M', 'i', 'v', 'x', '1'] {
        assert!(!is_roman_letter(c), "{c}");
    }
}

#[test]
fn expression_displays_in_its_notation() {
    let expr = Expression::new(4, Operator::Mul, 0, Notation::Roman).unwrap();
    assert_eq!(expr.to_string(), "IV * 0");

    let expr = Expression::new(10, Operator::Sub, 3, Notation::Arabic).unwrap();
    assert_eq!(expr.to_string(), "10 - 3");
}

#[test]
fn expression_rejects_negative_operands() {
    assert!(Expression::new(-1, Operator::Add, 1, Notation::Arabic).is_err());
}
