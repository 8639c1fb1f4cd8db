//! Filler handling for text fields.
//!
//! Variable-length values sit in fixed-width slots padded with `<` (as in
//! the document's machine-readable zone) or with null bytes (as written by
//! the encoder). Both are treated as empty.

/// MRZ filler character.
pub const FILLER: char = '<';

/// Removes null bytes, trims filler from both ends and turns each filler
/// character left inside the value into a space.
///
/// `SMITH<<JOHN<<<<` becomes `SMITH  JOHN`.
pub fn strip_filler(text: &str) -> String {
    text.replace('\0', "")
        .trim_matches(FILLER)
        .replace(FILLER, " ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(input, expected,
        case("USA", "USA"),
        case("P<", "P"),
        case("D<<", "D"),
        case("<<<", ""),
        case("", ""),
        case("\0\0\0", ""),
        case("F\0", "F"),
        case("123456789", "123456789"),
        case("<AB<C<", "AB C"),
        case("DOE<<JANE\0\0\0", "DOE  JANE"),
        case("SMITH<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<", "SMITH  JOHN"),
        case("SMITH<<JOHN<PAUL<<<<<<<<<<<<<<<<<<<<<<<", "SMITH  JOHN PAUL"),
        case("A\0<\0B", "A B"),
    )]
    fn test_strip_filler(input: &str, expected: &str) {
        assert_eq!(expected, strip_filler(input));
    }

    #[test]
    fn test_strip_filler_trailing_is_idempotent() {
        let value = "DOE<<JANE";
        let expected = strip_filler(value);
        for pad in 0..=(39 - value.len()) {
            let chevrons = format!("{value}{}", "<".repeat(pad));
            let nulls = format!("{value}{}", "\0".repeat(pad));
            assert_eq!(expected, strip_filler(&chevrons));
            assert_eq!(expected, strip_filler(&nulls));
            assert_eq!(expected, strip_filler(&strip_filler(&chevrons)));
        }
    }
}
