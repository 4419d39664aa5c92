//! Structured expression data.
//!
//! An expression is a template with `%s` placeholders plus one typed
//! parameter per placeholder. The type tag tells the renderer how to turn the
//! parameter into SQL text for a given platform.

use serde::Serialize;

/// How a parameter is turned into SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Quoted as an identifier.
    Identifier,
    /// Quoted as a trusted value.
    Value,
    /// Inserted verbatim.
    Literal,
}

/// One template with its parameters and their type tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionSegment {
    template: String,
    parameters: Vec<String>,
    types: Vec<TypeTag>,
}

impl ExpressionSegment {
    /// Creates a segment from a template and `(parameter, tag)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the number of `%s` placeholders in `template` differs from
    /// the number of parameters. That is a bug in the caller.
    #[must_use]
    pub fn new(template: impl Into<String>, parameters: Vec<(String, TypeTag)>) -> Self {
        let template = template.into();
        let placeholders = placeholder_count(&template);
        assert_eq!(
            placeholders,
            parameters.len(),
            "template {template:?} has {placeholders} placeholders but {} parameters were given",
            parameters.len()
        );
        let (parameters, types) = parameters.into_iter().unzip();
        Self {
            template,
            parameters,
            types,
        }
    }

    /// Returns the template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the parameters in placeholder order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Returns the type tags, one per parameter.
    #[must_use]
    pub fn types(&self) -> &[TypeTag] {
        &self.types
    }

    /// Iterates over `(parameter, tag)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, TypeTag)> {
        self.parameters
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().copied())
    }
}

/// An ordered sequence of [`ExpressionSegment`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpressionData {
    segments: Vec<ExpressionSegment>,
}

impl ExpressionData {
    /// Creates empty expression data.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: ExpressionSegment) {
        self.segments.push(segment);
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[ExpressionSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, ExpressionSegment> {
        self.segments.iter()
    }
}

impl From<ExpressionSegment> for ExpressionData {
    fn from(segment: ExpressionSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl FromIterator<ExpressionSegment> for ExpressionData {
    fn from_iter<I: IntoIterator<Item = ExpressionSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ExpressionData {
    type Item = &'a ExpressionSegment;
    type IntoIter = std::slice::Iter<'a, ExpressionSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for ExpressionData {
    type Item = ExpressionSegment;
    type IntoIter = std::vec::IntoIter<ExpressionSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// Anything that can describe itself as [`ExpressionData`].
pub trait Expression {
    /// Returns freshly computed expression data.
    fn expression_data(&self) -> ExpressionData;
}

impl Expression for ExpressionData {
    fn expression_data(&self) -> ExpressionData {
        self.clone()
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplatePart<'a> {
    /// Verbatim text.
    Text(&'a str),
    /// A `%s` placeholder.
    Placeholder,
}

/// Splits a template into text and placeholders. `%%` yields a literal `%`.
pub(crate) fn template_parts(template: &str) -> Vec<TemplatePart<'_>> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut rest = template;
    while let Some(idx) = rest.find('%') {
        let after = &rest[idx + 1..];
        let text_end = start + idx;
        if after.starts_with('s') {
            if text_end > start {
                parts.push(TemplatePart::Text(&template[start..text_end]));
            }
            parts.push(TemplatePart::Placeholder);
            start = text_end + 2;
        } else if after.starts_with('%') {
            parts.push(TemplatePart::Text(&template[start..=text_end]));
            start = text_end + 2;
        } else {
            // Lone `%`: keep it as text.
            parts.push(TemplatePart::Text(&template[start..=text_end]));
            start = text_end + 1;
        }
        rest = &template[start..];
    }
    if start < template.len() {
        parts.push(TemplatePart::Text(&template[start..]));
    }
    parts
}

fn placeholder_count(template: &str) -> usize {
    template_parts(template)
        .iter()
        .filter(|p| matches!(p, TemplatePart::Placeholder))
        .count()
}
