//! Default `{{name}}` variable interpolator.
//!
//! Replaces `{{Name}}` references with the value of the matching session
//! variable. Unknown or unset variables resolve to the empty string. Bare
//! string values are substituted verbatim; other JSON values use their
//! compact JSON representation.

use serde_json::Value;

use crate::ports::{InterpolationScope, VariableInterpolator};

/// Straightforward substitution interpolator.
#[derive(Default)]
pub struct DefaultVariableInterpolator;

impl DefaultVariableInterpolator {
    pub fn new() -> Self {
        Self
    }

    fn render(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn lookup(name: &str, scope: &InterpolationScope<'_>) -> String {
        scope
            .variables
            .iter()
            .find(|variable| variable.name == name)
            .and_then(|variable| variable.value.as_ref())
            .map(Self::render)
            .unwrap_or_default()
    }
}

impl VariableInterpolator for DefaultVariableInterpolator {
    fn interpolate(&self, template: Option<&str>, scope: &InterpolationScope<'_>) -> String {
        let Some(template) = template else {
            return String::new();
        };

        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                break;
            };
            output.push_str(&rest[..open]);
            let name = after_open[..close].trim();
            output.push_str(&Self::lookup(name, scope));
            rest = &after_open[close + 2..];
        }
        output.push_str(rest);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{SessionStore, Variable};
    use serde_json::json;

    fn scope_with<'a>(
        variables: &'a [Variable],
        store: &'a SessionStore,
    ) -> InterpolationScope<'a> {
        InterpolationScope {
            variables,
            session_store: store,
        }
    }

    #[test]
    fn substitutes_string_variable() {
        let store = SessionStore::new();
        let variables = vec![Variable::new("v1", "Name", json!("Ada"))];
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("Hello {{Name}}!"), &scope_with(&variables, &store));
        assert_eq!(result, "Hello Ada!");
    }

    #[test]
    fn substitutes_numeric_variable() {
        let store = SessionStore::new();
        let variables = vec![Variable::new("v1", "Price", json!(49.99))];
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("{{Price}}"), &scope_with(&variables, &store));
        assert_eq!(result, "49.99");
    }

    #[test]
    fn unknown_variable_becomes_empty() {
        let store = SessionStore::new();
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("{{Missing}}"), &scope_with(&[], &store));
        assert_eq!(result, "");
    }

    #[test]
    fn unset_variable_becomes_empty() {
        let store = SessionStore::new();
        let variables = vec![Variable::unset("v1", "Email")];
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("{{Email}}"), &scope_with(&variables, &store));
        assert_eq!(result, "");
    }

    #[test]
    fn none_template_is_empty() {
        let store = SessionStore::new();
        let interpolator = DefaultVariableInterpolator::new();

        assert_eq!(interpolator.interpolate(None, &scope_with(&[], &store)), "");
    }

    #[test]
    fn leaves_unclosed_braces_alone() {
        let store = SessionStore::new();
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("{{Oops"), &scope_with(&[], &store));
        assert_eq!(result, "{{Oops");
    }

    #[test]
    fn handles_multiple_references() {
        let store = SessionStore::new();
        let variables = vec![
            Variable::new("v1", "Qty", json!(3)),
            Variable::new("v2", "Item", json!("widgets")),
        ];
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(
            Some("{{Qty}} x {{Item}}"),
            &scope_with(&variables, &store),
        );
        assert_eq!(result, "3 x widgets");
    }

    #[test]
    fn trims_whitespace_inside_braces() {
        let store = SessionStore::new();
        let variables = vec![Variable::new("v1", "Name", json!("Ada"))];
        let interpolator = DefaultVariableInterpolator::new();

        let result = interpolator.interpolate(Some("{{ Name }}"), &scope_with(&variables, &store));
        assert_eq!(result, "Ada");
    }
}
