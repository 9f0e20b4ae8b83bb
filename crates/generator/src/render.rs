use crate::{
    dialect::{ClickHouse, Dialect, JsonKind},
    error::{GeneratorError, Result},
    escape::prepare_like_pattern,
    validate::validate_operation,
};
use flyql_syntax::{Expression, Literal, Operator};
use model::{Field, FieldMap};
use tracing::debug;

/// Fallback of the JSON type probe when no branch matched.
const JSON_PROBE_FALLBACK: &str = "0";

/// Renders single expressions for one dialect against one field map.
#[derive(Clone, Copy)]
pub struct ExpressionRenderer<'a> {
    dialect: &'a dyn Dialect,
    fields: &'a FieldMap,
}

impl<'a> ExpressionRenderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, fields: &'a FieldMap) -> Self {
        ExpressionRenderer { dialect, fields }
    }

    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    pub fn render(&self, expr: &Expression) -> Result<String> {
        if expr.has_path() {
            self.render_path(expr)
        } else {
            self.render_plain(expr)
        }
    }

    fn lookup(&self, name: &str) -> Result<&'a Field> {
        self.fields
            .get(name)
            .ok_or_else(|| GeneratorError::UnknownField(name.to_string()))
    }

    fn render_plain(&self, expr: &Expression) -> Result<String> {
        let field = self.lookup(&expr.key)?;

        let text = expr.value.to_string();
        if !field.allows(&text) {
            return Err(GeneratorError::DisallowedValue {
                field: field.name().to_string(),
                value: text,
            });
        }

        validate_operation(&expr.value, field.normalized_type(), expr.operator)?;

        let column = field.name();
        let sql = match expr.operator {
            Operator::EqualsRegex => self
                .dialect
                .regex_match(column, &self.quoted_value(&expr.value)),
            Operator::NotEqualsRegex => self.dialect.negate(
                &self
                    .dialect
                    .regex_match(column, &self.quoted_value(&expr.value)),
            ),
            Operator::Equals | Operator::NotEquals => self.render_equality(column, expr),
            op => format!("{column} {op} {}", self.dialect.literal(&expr.value)),
        };
        Ok(sql)
    }

    /// `=` and `!=` compare the quoted text form of the value, switching to
    /// `LIKE` when the value carries a wildcard.
    fn render_equality(&self, column: &str, expr: &Expression) -> String {
        if expr.value.is_null() {
            return format!(
                "{column} {} {}",
                expr.operator,
                self.dialect.literal(&expr.value)
            );
        }

        let text = expr.value.to_string();
        let (pattern_found, pattern) = prepare_like_pattern(&text, self.dialect.like_wildcard());
        if pattern_found {
            let negated = expr.operator == Operator::NotEquals;
            debug!(column, pattern = %pattern, negated, "Rewriting equality as pattern match");
            format!(
                "{column} {} {}",
                self.dialect.like_operator(negated),
                self.dialect.quote_string(&pattern)
            )
        } else {
            format!(
                "{column} {} {}",
                expr.operator,
                self.dialect.quote_string(&text)
            )
        }
    }

    fn render_path(&self, expr: &Expression) -> Result<String> {
        let field = self.lookup(expr.field_name())?;
        validate_operation(&expr.value, field.normalized_type(), expr.operator)?;

        let column = field.name();
        if !field.supports_path() {
            return Err(GeneratorError::UnsupportedFieldAccess(column.to_string()));
        }

        let path = expr.path();
        let sql = if field.jsonstring() {
            debug!(column, depth = path.len(), "Rendering JSON path comparison");
            self.render_json(column, &path, expr)
        } else if field.is_map() {
            let key = self.dialect.quote_string(&path.join(":"));
            debug!(column, key = %key, "Rendering map key comparison");
            self.render_function(&self.dialect.map_access(column, &key), expr)
        } else {
            let segment = path.first().copied().unwrap_or_default();
            let index = segment
                .parse::<i64>()
                .map_err(|_| GeneratorError::InvalidArrayIndex(segment.to_string()))?;
            debug!(column, index, "Rendering array element comparison");
            self.render_function(&self.dialect.array_access(column, index), expr)
        };
        Ok(sql)
    }

    /// `func(target, value)`, negated for `!~`.
    fn render_function(&self, target: &str, expr: &Expression) -> String {
        let call = format!(
            "{}({target}, {})",
            self.dialect.function_name(expr.operator),
            self.quoted_value(&expr.value)
        );
        self.negate_if_needed(call, expr.operator)
    }

    fn render_json(&self, column: &str, path: &[&str], expr: &Expression) -> String {
        let dialect = self.dialect;
        let function = dialect.function_name(expr.operator);
        let path_args = path
            .iter()
            .map(|segment| dialect.quote_string(segment))
            .collect::<Vec<_>>()
            .join(", ");

        let string_value = self.quoted_value(&expr.value);
        let mut branches = vec![(
            dialect.json_type_is(column, &path_args, JsonKind::String),
            format!(
                "{function}({}, {string_value})",
                dialect.json_extract(column, &path_args, JsonKind::String)
            ),
        )];

        if expr.value.is_number() && !expr.operator.is_regex() {
            for kind in JsonKind::NUMERIC_PROBES {
                branches.push((
                    dialect.json_type_is(column, &path_args, kind),
                    format!(
                        "{function}({}, {})",
                        dialect.json_extract(column, &path_args, kind),
                        expr.value
                    ),
                ));
            }
        }

        let probe = dialect.multi_if(&branches, JSON_PROBE_FALLBACK);
        self.negate_if_needed(probe, expr.operator)
    }

    /// Text form of the value as a string literal; null stays `NULL`.
    fn quoted_value(&self, value: &Literal) -> String {
        match value {
            Literal::Null => self.dialect.literal(value),
            value => self.dialect.quote_string(&value.to_string()),
        }
    }

    fn negate_if_needed(&self, sql: String, operator: Operator) -> String {
        if operator == Operator::NotEqualsRegex {
            self.dialect.negate(&sql)
        } else {
            sql
        }
    }
}

/// Renders one expression with the ClickHouse dialect.
pub fn expression_to_sql(expr: &Expression, fields: &FieldMap) -> Result<String> {
    ExpressionRenderer::new(&ClickHouse, fields).render(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn fields() -> FieldMap {
        [
            Field::unrestricted("message", false, "String"),
            Field::unrestricted("count", false, "Int64"),
            Field::unrestricted("price", false, "Float64"),
            Field::unrestricted("payload", true, "String"),
            Field::unrestricted("labels", false, "Map(String, String)"),
            Field::unrestricted("tags", false, "Array(String)"),
        ]
        .into_iter()
        .map(|f| (f.name().to_string(), f))
        .collect()
    }

    fn render(key: &str, operator: Operator, value: impl Into<Literal>) -> Result<String> {
        expression_to_sql(&Expression::new(key, operator, value), &fields())
    }

    #[test]
    fn test_plain_equality() {
        assert_eq!(
            render("message", Operator::Equals, "hello").unwrap(),
            "message = 'hello'"
        );
        assert_eq!(
            render("message", Operator::NotEquals, "it's").unwrap(),
            "message != 'it\\'s'"
        );
    }

    #[test]
    fn test_wildcards_switch_to_like() {
        assert_eq!(
            render("message", Operator::NotEquals, "*err*").unwrap(),
            "message NOT LIKE '%err%'"
        );
        assert_eq!(
            render("message", Operator::Equals, "100%").unwrap(),
            "message LIKE '100\\\\%'"
        );
    }

    #[test]
    fn test_escaped_wildcard_stays_equality() {
        assert_eq!(
            render("message", Operator::Equals, "a\\*b").unwrap(),
            "message = 'a*b'"
        );
    }

    #[test]
    fn test_null_equality() {
        assert_eq!(
            render("message", Operator::Equals, Literal::Null).unwrap(),
            "message = NULL"
        );
    }

    #[test]
    fn test_regex_operators() {
        assert_eq!(
            render("message", Operator::EqualsRegex, "^err.*").unwrap(),
            "match(message, '^err.*')"
        );
        assert_eq!(
            render("message", Operator::NotEqualsRegex, "^err.*").unwrap(),
            "not match(message, '^err.*')"
        );
    }

    #[test]
    fn test_ordering_keeps_literal_kind() {
        assert_eq!(render("count", Operator::GreaterThan, 10).unwrap(), "count > 10");
        assert_eq!(render("price", Operator::LessOrEqual, 10.0).unwrap(), "price <= 10.0");
        assert_eq!(
            render("message", Operator::GreaterOrEqual, "m").unwrap(),
            "message >= 'm'"
        );
    }

    #[test]
    fn test_map_key_with_separator() {
        assert_eq!(
            render("labels:app:name", Operator::NotEquals, "web").unwrap(),
            "notEquals(labels['app:name'], 'web')"
        );
    }

    #[test]
    fn test_negated_regex_on_array() {
        assert_eq!(
            render("tags:1", Operator::NotEqualsRegex, "^v").unwrap(),
            "not match(tags[1], '^v')"
        );
    }

    #[test]
    fn test_negative_array_index() {
        assert_eq!(
            render("tags:-1", Operator::Equals, "last").unwrap(),
            "equals(tags[-1], 'last')"
        );
    }

    #[test]
    fn test_non_string_literals_are_quoted_in_functions() {
        assert_eq!(
            render("message", Operator::EqualsRegex, 5).unwrap(),
            "match(message, '5')"
        );
        assert_eq!(
            render("tags:0", Operator::Equals, 5).unwrap(),
            "equals(tags[0], '5')"
        );
        assert_eq!(
            render("labels:env", Operator::Equals, 1.5).unwrap(),
            "equals(labels['env'], '1.5')"
        );
        assert_eq!(
            render("tags:0", Operator::NotEqualsRegex, true).unwrap(),
            "not match(tags[0], 'true')"
        );
    }

    #[test]
    fn test_json_numeric_probe() {
        assert_eq!(
            render("payload:stats:hits", Operator::Equals, 5).unwrap(),
            "multiIf(\
             JSONType(payload, 'stats', 'hits') = 'String', equals(JSONExtractString(payload, 'stats', 'hits'), '5'),\
             JSONType(payload, 'stats', 'hits') = 'Int64', equals(JSONExtractInt(payload, 'stats', 'hits'), 5),\
             JSONType(payload, 'stats', 'hits') = 'Double', equals(JSONExtractFloat(payload, 'stats', 'hits'), 5),\
             JSONType(payload, 'stats', 'hits') = 'Bool', equals(JSONExtractBool(payload, 'stats', 'hits'), 5),\
             0)"
        );
    }

    #[test]
    fn test_json_regex_skips_numeric_probe() {
        assert_eq!(
            render("payload:code", Operator::NotEqualsRegex, "42").unwrap(),
            "not multiIf(JSONType(payload, 'code') = 'String', match(JSONExtractString(payload, 'code'), '42'),0)"
        );
    }

    #[test]
    fn test_unknown_field_in_path() {
        assert_eq!(
            render("missing:a", Operator::Equals, "x"),
            Err(GeneratorError::UnknownField("missing".to_string()))
        );
    }

    #[test]
    fn test_path_on_plain_field() {
        assert_eq!(
            render("message:a", Operator::Equals, "x"),
            Err(GeneratorError::UnsupportedFieldAccess("message".to_string()))
        );
    }

    #[test]
    fn test_validation_applies_to_path_access() {
        assert!(matches!(
            render("payload:n", Operator::GreaterThan, 1),
            Err(GeneratorError::ForbiddenOperation { .. })
        ));
    }

    #[traced_test]
    #[test]
    fn test_logs_dispatch_decision() {
        render("tags:0", Operator::Equals, "a").unwrap();
        assert!(logs_contain("Rendering array element comparison"));
    }
}
