//! Numeric field parsing for localization tables.
//!
//! Localization exporters write values either as plain decimals or as
//! `<mantissa>E<exponent>` with a comma or dot decimal separator. Only the
//! mantissa of the `E` form is used: `"1,5E-3"` parses to `1.5`. Downstream
//! outputs depend on this magnitude, so the exponent is dropped on purpose.

use std::num::ParseFloatError;

/// Parses a numeric field, keeping only the mantissa of `E` notation.
///
/// Surrounding whitespace is ignored. The comma-to-dot replacement applies
/// to the `E` form only; a plain field must use a dot. A lower-case `e` is
/// ordinary float syntax and keeps its exponent.
///
/// # Errors
/// Returns the underlying [`ParseFloatError`] for empty or non-numeric text.
pub fn parse_scientific(field: &str) -> Result<f64, ParseFloatError> {
    let field = field.trim();
    match field.split_once('E') {
        Some((mantissa, _exponent)) => mantissa.trim().replace(',', ".").parse(),
        None => field.parse(),
    }
}
