/// Validity of the required name field on the upload form: anything that
/// trims to empty keeps the submit button disabled.
pub fn required_field_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_only_are_invalid() {
        assert!(!required_field_filled(""));
        assert!(!required_field_filled("   "));
        assert!(!required_field_filled("\t\n"));
    }

    #[test]
    fn any_non_whitespace_content_is_valid() {
        assert!(required_field_filled("Burg Eltz"));
        assert!(required_field_filled(" x "));
    }
}
