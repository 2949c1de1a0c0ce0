use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format for '{0}'. Expected 'KEY=VALUE' (e.g., 'generation.precision=4').")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Splits `KEY=VALUE` at the first `=`, trimming whitespace around both halves.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: input.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            input: input.to_string(),
        });
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_equals_sign() {
        assert_eq!(
            parse_key_value("explain.endpoint=http://host/?a=b"),
            Ok(("explain.endpoint", "http://host/?a=b"))
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            parse_key_value("  generation.precision = 4 "),
            Ok(("generation.precision", "4"))
        );
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse_key_value("generation.precision"),
            Err(ParseError::MissingSeparator("generation.precision".to_string()))
        );
    }

    #[test]
    fn rejects_empty_components() {
        assert!(matches!(
            parse_key_value("=4"),
            Err(ParseError::EmptyComponent { component: "key", .. })
        ));
        assert!(matches!(
            parse_key_value("explain.model= "),
            Err(ParseError::EmptyComponent { component: "value", .. })
        ));
    }
}
