//! Share codes: a puzzle packed into one URL-friendly string.
//!
//! The rows (4 words and a label each) are written as tab-separated
//! fields, one row per line with no trailing newline, and the text is
//! base64-encoded with the standard padded alphabet.
//!
//! Decoding does not check the puzzle shape; `Engine` construction does.
//!
//! ```
//! use connections_engine::share;
//!
//! let rows = vec![vec!["a", "b"], vec!["c", "d"]];
//! let code = share::encode(&rows);
//! assert_eq!(share::decode(&code).unwrap(), rows);
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::ShareCodeError;

/// Field separator within a row.
pub const FIELD_SEPARATOR: &str = "\t";

/// Row separator.
pub const ROW_SEPARATOR: &str = "\n";

/// Pack rows of fields into a share code.
pub fn encode<G, S>(rows: &[G]) -> String
where
    G: AsRef<[S]>,
    S: AsRef<str>,
{
    let text = rows
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(S::as_ref)
                .collect::<Vec<&str>>()
                .join(FIELD_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR);

    STANDARD.encode(text)
}

/// Unpack a share code into rows of fields.
///
/// ## Errors
///
/// `ShareCodeError::Base64` for malformed base64, `ShareCodeError::Utf8`
/// if the payload is not UTF-8 text.
pub fn decode(code: &str) -> Result<Vec<Vec<String>>, ShareCodeError> {
    let bytes = STANDARD.decode(code.trim())?;
    let text = String::from_utf8(bytes).map_err(|_| ShareCodeError::Utf8)?;

    Ok(text
        .split(ROW_SEPARATOR)
        .map(|row| row.split(FIELD_SEPARATOR).map(str::to_owned).collect())
        .collect())
}
