//! Field-presence checks shared by the storage gateway and the service layer

use crate::error::{Result, SonoraError};

/// Fail with `InvalidInput` when any of the named values is empty.
///
/// The message lists every empty field, e.g. `"id and owner must not be empty"`.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(SonoraError::invalid_input(format!(
        "{} must not be empty",
        missing.join(" and ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_present_passes() {
        assert!(require_fields(&[("id", "p1"), ("owner", "u1")]).is_ok());
    }

    #[test]
    fn single_missing_field_is_named() {
        let err = require_fields(&[("id", "")]).unwrap_err();
        assert_eq!(err.to_string(), "id must not be empty");
    }

    #[test]
    fn every_missing_field_is_listed() {
        let err = require_fields(&[("id", ""), ("owner", ""), ("song_id", "s1")]).unwrap_err();
        assert_eq!(err.to_string(), "id and owner must not be empty");
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(require_fields(&[("name", " ")]).is_ok());
    }

    proptest::proptest! {
        #[test]
        fn non_empty_values_always_pass(id in ".{1,32}", owner in ".{1,32}") {
            proptest::prop_assert!(require_fields(&[("id", id.as_str()), ("owner", owner.as_str())]).is_ok());
        }

        #[test]
        fn empty_value_is_always_reported(name in "[a-z_]{1,16}", other in ".{1,32}") {
            let err = require_fields(&[("other", other.as_str()), (name.as_str(), "")]).unwrap_err();
            proptest::prop_assert_eq!(err.to_string(), format!("{name} must not be empty"));
        }
    }
}
