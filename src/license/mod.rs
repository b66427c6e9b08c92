//! License detection for license files found at the project root
//!
//! The generator only needs a yes/no answer with a single SPDX identifier, so
//! the capability is a small trait. [`PhraseLicenseClassifier`] is the bundled
//! implementation; callers can plug in anything that maps bytes to an id.

mod phrases;

pub use phrases::PhraseLicenseClassifier;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    #[error("No known license matched the license file")]
    NoMatch,

    #[error("Multiple licenses matched license file: {}", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Maps the raw contents of a license file to a single license identifier
pub trait LicenseClassifier: Send + Sync {
    /// Returns the identifier only when exactly one license matches
    fn classify(&self, text: &[u8]) -> Result<String, LicenseError>;
}

/// Turns a list of matched ids into the classifier result
pub(crate) fn single_match(mut ids: Vec<String>) -> Result<String, LicenseError> {
    ids.dedup();
    match ids.len() {
        0 => Err(LicenseError::NoMatch),
        1 => Ok(ids.remove(0)),
        _ => Err(LicenseError::Ambiguous(ids)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(single_match(vec!["MIT".to_string()]), Ok("MIT".to_string()));
        assert_eq!(
            single_match(vec!["MIT".to_string(), "MIT".to_string()]),
            Ok("MIT".to_string())
        );
        assert_eq!(single_match(vec![]), Err(LicenseError::NoMatch));
    }

    #[test]
    fn test_ambiguous_message_lists_ids() {
        let err = single_match(vec!["MIT".to_string(), "Apache-2.0".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Multiple licenses matched license file: MIT, Apache-2.0"
        );
    }
}
