use serde::Serialize;

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

struct Rule<T> {
    check: Box<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

/// Declarative form validation: each field owns an ordered list of
/// predicate + message pairs.
///
/// Fields are evaluated in the order they were declared and each field's rules
/// in the order they were added, so the error list is deterministic. Every
/// failing rule is reported, not only the first one per field.
pub struct ValidationRules<T> {
    fields: Vec<(&'static str, Vec<Rule<T>>)>,
}

impl<T> Default for ValidationRules<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> ValidationRules<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `field`. The predicate returns `true` when the value is valid.
    pub fn rule<F>(mut self, field: &'static str, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let rule = Rule {
            check: Box::new(check),
            message: message.into(),
        };

        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.fields.push((field, vec![rule])),
        }

        self
    }

    /// Names of the fields that carry rules, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn validate(&self, value: &T) -> std::result::Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .flat_map(|(field, rules)| {
                let field = *field;
                rules
                    .iter()
                    .filter(|rule| !(rule.check)(value))
                    .map(move |rule| FieldError {
                        field,
                        message: rule.message.clone(),
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Outcome of validating a form, as returned to the UI
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl From<std::result::Result<(), Vec<FieldError>>> for ValidationReport {
    fn from(result: std::result::Result<(), Vec<FieldError>>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                errors: Vec::new(),
            },
            Err(errors) => Self {
                valid: false,
                errors,
            },
        }
    }
}

/// Verdict on a single amount typed into a payment or settlement form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AmountValidation {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}
