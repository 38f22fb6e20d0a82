//! Message templates for errors surfaced across the boundary.
//!
//! Templates are kept unformatted so the application side can localize them;
//! `{attribute}` is the only placeholder.

/// Detail for a mandatory attribute that is absent or not of the expected type.
pub const MISSING_ATTRIBUTE: &str = "Missing attribute: {attribute}. Include it in the request.";

/// Detail for an optional attribute that is present with an unexpected type.
pub const INVALID_ATTRIBUTE: &str = "Invalid attribute: {attribute} has an unexpected type.";

/// Substitute the attribute name into a template.
pub fn format_attribute(template: &str, attribute: &str) -> String {
    template.replace("{attribute}", attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_attribute_fills_placeholder() {
        assert_eq!(
            format_attribute(MISSING_ATTRIBUTE, "key"),
            "Missing attribute: key. Include it in the request."
        );
    }

    #[test]
    fn format_attribute_without_placeholder_is_identity() {
        assert_eq!(format_attribute("static text", "key"), "static text");
    }
}
