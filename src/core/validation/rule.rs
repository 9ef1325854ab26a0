//! A single field's parse-and-check rule

use super::FieldErrors;
use crate::core::form::FormInput;
use serde_json::Value;

type Parser<T> = Box<dyn Fn(Option<&Value>) -> Option<T> + Send + Sync>;
type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Parses one raw form field into a `T` and runs refinements on the result.
///
/// A rejected field records exactly one message: the parser's message when the
/// raw value has the wrong shape, otherwise the message of the first failing
/// refinement.
pub struct FieldRule<T> {
    field: &'static str,
    parse: Parser<T>,
    message: &'static str,
    refinements: Vec<(Check<T>, &'static str)>,
}

impl<T> FieldRule<T> {
    pub fn new<P>(field: &'static str, parse: P, message: &'static str) -> Self
    where
        P: Fn(Option<&Value>) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            field,
            parse: Box::new(parse),
            message,
            refinements: Vec::new(),
        }
    }

    /// Add a check that the parsed value must pass
    pub fn refine<C>(mut self, check: C, message: &'static str) -> Self
    where
        C: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.refinements.push((Box::new(check), message));
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Check one raw value
    pub fn check(&self, raw: Option<&Value>) -> Result<T, &'static str> {
        let value = (self.parse)(raw).ok_or(self.message)?;
        match self.refinements.iter().find(|(check, _)| !check(&value)) {
            Some((_, message)) => Err(*message),
            None => Ok(value),
        }
    }

    /// Read this rule's field from `form`, recording a failure in `errors`
    pub fn apply(&self, form: &dyn FormInput, errors: &mut FieldErrors) -> Option<T> {
        match self.check(form.get(self.field)) {
            Ok(value) => Some(value),
            Err(message) => {
                errors.add(self.field, message);
                None
            }
        }
    }
}

impl<T> std::fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .field("refinements", &self.refinements.len())
            .finish()
    }
}
