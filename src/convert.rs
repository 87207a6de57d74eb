//! The Arabic-to-Roman conversion core.
//!
//! A pure, stateless pipeline of chained stages plus a batch variant
//! over a closed range. Stages compose by plain `Result` plumbing and
//! share one error taxonomy; the HTTP layer (or any other caller)
//! decides how failures are surfaced.

use thiserror::Error;

// =============================================================================
// Domain Bounds
// =============================================================================

/// Smallest Arabic integer the service converts.
pub const MIN_INPUT: u64 = 1;

/// Largest Arabic integer the service converts.
///
/// 3999 (`MMMCMXCIX`) is the largest value expressible in classical
/// notation without extending the symbol set past `M`.
pub const MAX_INPUT: u64 = 3999;

// =============================================================================
// Errors
// =============================================================================

/// Failures the conversion pipeline can produce.
///
/// Every variant is a deterministic validation failure, terminal for
/// the call that raised it and propagated unchanged from inner stage to
/// outer caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input is not a well-formed non-negative base-10 integer string.
    #[error("input {input} must be an integer")]
    InvalidFormat {
        /// The rejected input, echoed verbatim.
        input: String,
    },

    /// Well-formed integer outside `[MIN_INPUT, MAX_INPUT]`.
    #[error("input {input} must be between {min} and {max}", min = MIN_INPUT, max = MAX_INPUT)]
    OutOfRange {
        /// The rejected value.
        input: u64,
    },

    /// Range request whose bounds do not satisfy `min < max`.
    #[error("min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound of the rejected request.
        min: u64,
        /// Upper bound of the rejected request.
        max: u64,
    },
}

// =============================================================================
// Stage 1: Parse
// =============================================================================

/// Parses a string into a plain Arabic integer.
///
/// Accepts exactly one-or-more ASCII decimal digits: no sign, no decimal
/// point, no exponent notation, no whitespace, no non-ASCII digits.
/// Leading zeros are permitted and normalized away (`"007"` parses to
/// `7`). The parser places no length limit of its own; a digit string
/// too large for `u64` is still well formed and saturates to
/// `u64::MAX`, leaving the rejection to [`expect_within_range`].
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFormat`] when `input` deviates from
/// `^[0-9]+$` in any way.
pub fn parse_arabic(input: &str) -> Result<u64, ConvertError> {
    if input.is_empty() || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ConvertError::InvalidFormat {
            input: input.to_owned(),
        });
    }

    // The digit check above rules out every parse failure except
    // overflow, and any overflowing value is far beyond MAX_INPUT, so
    // saturating hands the rejection to the range stage.
    Ok(input.parse().unwrap_or(u64::MAX))
}

// =============================================================================
// Stage 2: Validate
// =============================================================================

/// Confirms an integer lies within `[MIN_INPUT, MAX_INPUT]`.
///
/// In-range input is returned unchanged. The `u64` parameter discharges
/// the wrong-kind guard of the dynamically-typed original statically, so
/// out-of-range values are the only reachable failure here.
///
/// # Errors
///
/// Returns [`ConvertError::OutOfRange`] when `input` is below
/// [`MIN_INPUT`] or above [`MAX_INPUT`].
pub const fn expect_within_range(input: u64) -> Result<u64, ConvertError> {
    if input < MIN_INPUT || input > MAX_INPUT {
        Err(ConvertError::OutOfRange { input })
    } else {
        Ok(input)
    }
}

// =============================================================================
// Stage 3: Encode
// =============================================================================

/// Symbol table for the ones place (one: I, five: V, ten: X).
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Symbol table for the tens place (one: X, five: L, ten: C).
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];

/// Symbol table for the hundreds place (one: C, five: D, ten: M).
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];

/// Symbol table for the thousands place. Classical notation stops at
/// `MMM`, so the table does too; digits past it fall off the end and
/// encode as nothing.
const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];

/// Looks up the symbol combination for one decimal place.
///
/// Digits beyond the table encode as the empty string, which is what
/// makes [`to_roman`] total: an inexpressible column is omitted rather
/// than crashing the encoder.
fn place_symbol(table: &[&'static str], digit: u64) -> &'static str {
    usize::try_from(digit)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or("")
}

/// Encodes an Arabic integer as a Roman numeral string.
///
/// Decomposes the integer into thousands, hundreds, tens, and ones via
/// integer division and modulo, maps each digit through its fixed symbol
/// table, and concatenates most-significant place first. Total and pure
/// over all of `u64`: out-of-domain input degrades to omitting the
/// symbol columns it cannot express (`to_roman(0) == ""`,
/// `to_roman(4000) == ""`) and never panics. The composed pipeline keeps
/// such input from ever reaching here; see [`expect_within_range`].
#[must_use]
pub fn to_roman(arabic: u64) -> String {
    // 3888 -> MMMDCCCLXXXVIII, the longest numeral in the domain.
    let mut roman = String::with_capacity(15);
    roman.push_str(place_symbol(&THOUSANDS, arabic / 1_000));
    roman.push_str(place_symbol(&HUNDREDS, arabic / 100 % 10));
    roman.push_str(place_symbol(&TENS, arabic / 10 % 10));
    roman.push_str(place_symbol(&ONES, arabic % 10));
    roman
}

// =============================================================================
// Composed Pipeline
// =============================================================================

/// Converts a single string-encoded Arabic integer to its Roman numeral.
///
/// Chains [`parse_arabic`], [`expect_within_range`], and [`to_roman`] in
/// strict pipeline order, short-circuiting on the first failure.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFormat`] or
/// [`ConvertError::OutOfRange`] exactly as the parse and validate stages
/// produce them.
pub fn convert_arabic_to_roman(input: &str) -> Result<String, ConvertError> {
    let arabic = expect_within_range(parse_arabic(input)?)?;
    Ok(to_roman(arabic))
}

// =============================================================================
// Range Batch
// =============================================================================

/// One Arabic-to-Roman pairing within a range conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Canonical decimal rendering of the integer.
    pub arabic: String,
    /// Roman numeral encoding of the same integer.
    pub roman: String,
}

impl Conversion {
    /// Builds the record for one validated Arabic integer.
    #[must_use]
    pub fn from_arabic(arabic: u64) -> Self {
        Self {
            arabic: arabic.to_string(),
            roman: to_roman(arabic),
        }
    }
}

/// Converts every integer in the closed interval `[min, max]`.
///
/// Both bounds are parsed and range-checked independently through the
/// single-value stages before any encoding happens; a failure on either
/// bound aborts the whole call with that failure and no partial results.
/// Valid bounds must additionally satisfy `min < max`; equal bounds are
/// rejected just like inverted ones. Records come back ascending,
/// inclusive on both ends, at most [`MAX_INPUT`] of them.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidFormat`] or
/// [`ConvertError::OutOfRange`] from bound validation, or
/// [`ConvertError::InvalidRange`] when `min >= max`.
pub fn convert_arabic_to_roman_range(
    min: &str,
    max: &str,
) -> Result<Vec<Conversion>, ConvertError> {
    let min = expect_within_range(parse_arabic(min)?)?;
    let max = expect_within_range(parse_arabic(max)?)?;

    if min >= max {
        return Err(ConvertError::InvalidRange { min, max });
    }

    Ok((min..=max).map(Conversion::from_arabic).collect())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // -------------------------------------------------------------------------
    // parse_arabic
    // -------------------------------------------------------------------------

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("2000", 2000)]
    #[case("3999", 3999)]
    #[case("4000", 4000)]
    #[case("007", 7)]
    fn test_parse_arabic_accepts_digit_strings(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_arabic(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1e4")]
    #[case("1.2")]
    #[case("-1")]
    #[case("+1")]
    #[case(" 1")]
    #[case("1 ")]
    #[case("twelve")]
    #[case("0x10")]
    #[case("١٢٣")] // Arabic-Indic digits are not ASCII digits
    fn test_parse_arabic_rejects_non_digit_strings(#[case] input: &str) {
        assert_eq!(
            parse_arabic(input),
            Err(ConvertError::InvalidFormat {
                input: input.to_owned()
            })
        );
    }

    #[rstest]
    fn test_parse_arabic_saturates_past_u64() {
        // 21 nines is structurally valid but exceeds u64; saturation lets
        // the range stage report it as out of range, not malformed.
        assert_eq!(parse_arabic("999999999999999999999"), Ok(u64::MAX));
    }

    // -------------------------------------------------------------------------
    // expect_within_range
    // -------------------------------------------------------------------------

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(2000)]
    #[case(3999)]
    fn test_expect_within_range_returns_input_unchanged(#[case] input: u64) {
        assert_eq!(expect_within_range(input), Ok(input));
    }

    #[rstest]
    #[case(0)]
    #[case(4000)]
    #[case(u64::MAX)]
    fn test_expect_within_range_rejects_out_of_range_input(#[case] input: u64) {
        assert_eq!(
            expect_within_range(input),
            Err(ConvertError::OutOfRange { input })
        );
    }

    #[rstest]
    fn test_parse_then_validate_covers_whole_domain() {
        // The exhaustive check the original service shipped with: every
        // integer in [MIN_INPUT, MAX_INPUT] survives parse + validate.
        for expected in MIN_INPUT..=MAX_INPUT {
            let result = parse_arabic(&expected.to_string()).and_then(expect_within_range);
            assert_eq!(result, Ok(expected));
        }
    }

    // -------------------------------------------------------------------------
    // to_roman
    // -------------------------------------------------------------------------

    #[rstest]
    #[case(1, "I")]
    #[case(2, "II")]
    #[case(3, "III")]
    #[case(4, "IV")]
    #[case(5, "V")]
    #[case(6, "VI")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(39, "XXXIX")]
    #[case(40, "XL")]
    #[case(90, "XC")]
    #[case(160, "CLX")]
    #[case(246, "CCXLVI")]
    #[case(400, "CD")]
    #[case(789, "DCCLXXXIX")]
    #[case(900, "CM")]
    #[case(1009, "MIX")]
    #[case(1983, "MCMLXXXIII")]
    #[case(2421, "MMCDXXI")]
    #[case(3888, "MMMDCCCLXXXVIII")]
    #[case(3999, "MMMCMXCIX")]
    fn test_to_roman_place_value_table(#[case] arabic: u64, #[case] expected: &str) {
        assert_eq!(to_roman(arabic), expected);
    }

    #[rstest]
    #[case(0, "")]
    #[case(1000, "M")]
    #[case(4000, "")]
    #[case(5000, "")]
    fn test_to_roman_degrades_outside_domain(#[case] arabic: u64, #[case] expected: &str) {
        assert_eq!(to_roman(arabic), expected);
    }

    #[rstest]
    fn test_to_roman_omits_only_the_inexpressible_column() {
        // 4500 has no thousands representation, but the hundreds place
        // still encodes.
        assert_eq!(to_roman(4500), "D");
    }

    // -------------------------------------------------------------------------
    // convert_arabic_to_roman
    // -------------------------------------------------------------------------

    #[rstest]
    #[case("1", "I")]
    #[case("0090", "XC")]
    #[case("2421", "MMCDXXI")]
    #[case("3999", "MMMCMXCIX")]
    fn test_convert_arabic_to_roman_chains_the_stages(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_arabic_to_roman(input), Ok(expected.to_owned()));
    }

    #[rstest]
    fn test_convert_arabic_to_roman_propagates_stage_failures() {
        assert_eq!(
            convert_arabic_to_roman("0"),
            Err(ConvertError::OutOfRange { input: 0 })
        );
        assert_eq!(
            convert_arabic_to_roman("4000"),
            Err(ConvertError::OutOfRange { input: 4000 })
        );
        assert_eq!(
            convert_arabic_to_roman("IV"),
            Err(ConvertError::InvalidFormat {
                input: "IV".to_owned()
            })
        );
    }

    // -------------------------------------------------------------------------
    // convert_arabic_to_roman_range
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_convert_range_returns_ascending_inclusive_records() {
        let conversions = convert_arabic_to_roman_range("1", "2").unwrap();
        assert_eq!(
            conversions,
            vec![
                Conversion {
                    arabic: "1".to_owned(),
                    roman: "I".to_owned()
                },
                Conversion {
                    arabic: "2".to_owned(),
                    roman: "II".to_owned()
                },
            ]
        );
    }

    #[rstest]
    fn test_convert_range_normalizes_bound_rendering() {
        // Leading zeros on the request bounds do not leak into records.
        let conversions = convert_arabic_to_roman_range("08", "10").unwrap();
        let arabics: Vec<&str> = conversions
            .iter()
            .map(|conversion| conversion.arabic.as_str())
            .collect();
        let romans: Vec<&str> = conversions
            .iter()
            .map(|conversion| conversion.roman.as_str())
            .collect();
        assert_eq!(arabics, ["8", "9", "10"]);
        assert_eq!(romans, ["VIII", "IX", "X"]);
    }

    #[rstest]
    fn test_convert_range_rejects_equal_bounds() {
        assert_eq!(
            convert_arabic_to_roman_range("1", "1"),
            Err(ConvertError::InvalidRange { min: 1, max: 1 })
        );
    }

    #[rstest]
    fn test_convert_range_rejects_inverted_bounds() {
        assert_eq!(
            convert_arabic_to_roman_range("2", "1"),
            Err(ConvertError::InvalidRange { min: 2, max: 1 })
        );
    }

    #[rstest]
    fn test_convert_range_propagates_bound_failures_without_partial_results() {
        assert_eq!(
            convert_arabic_to_roman_range("0", "2"),
            Err(ConvertError::OutOfRange { input: 0 })
        );
        assert_eq!(
            convert_arabic_to_roman_range("3998", "4000"),
            Err(ConvertError::OutOfRange { input: 4000 })
        );
        assert_eq!(
            convert_arabic_to_roman_range("x", "2"),
            Err(ConvertError::InvalidFormat {
                input: "x".to_owned()
            })
        );
    }

    #[rstest]
    fn test_convert_range_full_domain_is_bounded() {
        let conversions = convert_arabic_to_roman_range("1", "3999").unwrap();
        assert_eq!(conversions.len(), 3999);
        assert_eq!(conversions[0].roman, "I");
        assert_eq!(conversions[3998].roman, "MMMCMXCIX");
    }

    // -------------------------------------------------------------------------
    // Error Display
    // -------------------------------------------------------------------------

    #[rstest]
    fn test_error_messages_name_the_offending_input() {
        assert_eq!(
            ConvertError::InvalidFormat {
                input: "1.2".to_owned()
            }
            .to_string(),
            "input 1.2 must be an integer"
        );
        assert_eq!(
            ConvertError::OutOfRange { input: 4000 }.to_string(),
            "input 4000 must be between 1 and 3999"
        );
        assert_eq!(
            ConvertError::InvalidRange { min: 3, max: 3 }.to_string(),
            "min 3 must be less than max 3"
        );
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
