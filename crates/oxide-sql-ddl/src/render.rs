//! Rendering expression data into SQL text for a platform.

use oxide_sql_platform::{Platform, Result};
use tracing::debug;

use crate::expression::{
    template_parts, Expression, ExpressionData, ExpressionSegment, TemplatePart, TypeTag,
};

/// Renders any [`Expression`] for `platform`.
///
/// # Errors
///
/// Returns the platform's error if an identifier parameter cannot be quoted
/// (for example an empty column name).
pub fn render<E: Expression + ?Sized>(expression: &E, platform: &Platform) -> Result<String> {
    render_data(&expression.expression_data(), platform)
}

/// Renders expression data for `platform`.
///
/// Each parameter is resolved by its tag: identifiers are quoted as
/// identifiers, values as trusted values, literals are copied verbatim. The
/// results replace the template's `%s` placeholders in order and the rendered
/// segments are concatenated.
///
/// # Errors
///
/// Returns the platform's error if an identifier parameter cannot be quoted.
pub fn render_data(data: &ExpressionData, platform: &Platform) -> Result<String> {
    let mut sql = String::new();
    for segment in data {
        render_segment(segment, platform, &mut sql)?;
    }
    debug!(platform = platform.name(), sql = %sql, "Rendered expression");
    Ok(sql)
}

fn render_segment(
    segment: &ExpressionSegment,
    platform: &Platform,
    out: &mut String,
) -> Result<()> {
    let mut pairs = segment.pairs();
    for part in template_parts(segment.template()) {
        match part {
            TemplatePart::Text(text) => out.push_str(text),
            TemplatePart::Placeholder => {
                // Segment construction guarantees one pair per placeholder.
                let Some((parameter, tag)) = pairs.next() else {
                    break;
                };
                match tag {
                    TypeTag::Identifier => out.push_str(&platform.quote_identifier(parameter)?),
                    TypeTag::Value => out.push_str(&platform.quote_trusted_value(parameter)),
                    TypeTag::Literal => out.push_str(parameter),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_resolves_each_tag() {
        let data: ExpressionData = ExpressionSegment::new(
            "%s = %s %s",
            vec![
                ("name".to_string(), TypeTag::Identifier),
                ("O'Bar".to_string(), TypeTag::Value),
                ("COLLATE NOCASE".to_string(), TypeTag::Literal),
            ],
        )
        .into();
        assert_eq!(
            render_data(&data, &Platform::sqlite()).unwrap(),
            "\"name\" = 'O''Bar' COLLATE NOCASE"
        );
    }

    #[test]
    fn test_render_concatenates_segments() {
        let data: ExpressionData = [
            ExpressionSegment::new("%s", vec![("a".to_string(), TypeTag::Identifier)]),
            ExpressionSegment::new(", %s", vec![("b".to_string(), TypeTag::Identifier)]),
        ]
        .into_iter()
        .collect();
        assert_eq!(render_data(&data, &Platform::mysql()).unwrap(), "`a`, `b`");
    }

    #[test]
    fn test_render_percent_escape() {
        let data: ExpressionData = ExpressionSegment::new(
            "%s LIKE '100%%'",
            vec![("rate".to_string(), TypeTag::Identifier)],
        )
        .into();
        assert_eq!(
            render_data(&data, &Platform::sql_server()).unwrap(),
            "[rate] LIKE '100%'"
        );
    }

    #[test]
    fn test_render_empty_identifier_fails() {
        let data: ExpressionData =
            ExpressionSegment::new("%s", vec![(String::new(), TypeTag::Identifier)]).into();
        let err = render_data(&data, &Platform::sql_server()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_render_does_not_count_as_insecure() {
        let platform = Platform::sql_server();
        let data: ExpressionData =
            ExpressionSegment::new("%s", vec![("v".to_string(), TypeTag::Value)]).into();
        render_data(&data, &platform).unwrap();
        assert_eq!(platform.insecure_quote_count(), 0);
    }
}
