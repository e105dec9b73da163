use super::annotation::{Annotation, parse};

/// Outcome of checking an annotation's current value against its candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { message: String },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { message } => Some(message),
        }
    }
}

impl Annotation {
    /// Check that the current value is one of the candidates.
    ///
    /// A missing or empty value has nothing to check and is valid.
    pub fn validate(&self) -> Validation {
        let Some(value) = self.current_value().filter(|v| !v.is_empty()) else {
            return Validation::Valid;
        };

        if self.is_candidate(value) {
            Validation::Valid
        } else {
            Validation::Invalid {
                message: format!(
                    "Variable value \"{}\" does not match any carousel value ({})",
                    value,
                    self.candidates.join(", ")
                ),
            }
        }
    }
}

/// Validate the annotation on `line`. Lines without one are valid.
pub fn validate(line: &str, comment_token: &str) -> Validation {
    parse(line, comment_token)
        .map(|annotation| annotation.validate())
        .unwrap_or(Validation::Valid)
}
