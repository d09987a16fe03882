//! Minimal `{variable}` template engine used for form markup.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Templates are parsed once into segments, so syntax errors in a user
//! supplied template surface when it is loaded rather than on first render.
//! Rendering an undefined variable is an error, never an empty string.

use std::collections::HashMap;
use std::fmt;

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the variable's `{` in the template.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// Byte offset of the empty variable.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Variable { name: String, position: usize },
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Returns
    ///
    /// * `Ok(Template)` - Successfully parsed template
    /// * `Err(TemplateError)` - Unmatched `{` or empty `{}`
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    text.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    let name = name.trim();
                    if name.is_empty() {
                        return Err(TemplateError::EmptyVariableName { position: pos });
                    }

                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Variable {
                        name: name.to_string(),
                        position: pos,
                    });
                }
                '}' => {
                    // `}}` and a lone `}` both render one brace.
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                    }
                    text.push('}');
                }
                _ => text.push(ch),
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self { segments })
    }

    /// Names of the variables referenced, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable { name, .. } => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Substitute `variables` into the template.
    pub fn render(&self, variables: &HashMap<&str, String>) -> Result<String, TemplateError> {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => result.push_str(text),
                Segment::Variable { name, position } => match variables.get(name.as_str()) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.clone(),
                            position: *position,
                        });
                    }
                },
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<const N: usize>(pairs: [(&'static str, &str); N]) -> HashMap<&'static str, String> {
        pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect()
    }

    fn render(source: &str, variables: &HashMap<&str, String>) -> Result<String, TemplateError> {
        Template::parse(source)?.render(variables)
    }

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("label", "Name"), ("index", "1")]);
        let result = render("<label>{label}</label> #{index}", &vars).unwrap();
        assert_eq!(result, "<label>Name</label> #1");
    }

    #[test]
    fn test_plain_text_and_empty_template() {
        let vars = HashMap::new();
        assert_eq!(render("Just plain text", &vars).unwrap(), "Just plain text");
        assert_eq!(render("", &vars).unwrap(), "");
    }

    #[test]
    fn test_escape_braces() {
        let vars = HashMap::new();
        let result = render("a {{b}} c }} d } e", &vars).unwrap();
        assert_eq!(result, "a {b} c } d } e");
    }

    #[test]
    fn test_whitespace_in_variable_name_is_trimmed() {
        let vars = vars([("title", "Greeter")]);
        assert_eq!(render("<h1>{ title }</h1>", &vars).unwrap(), "<h1>Greeter</h1>");
    }

    #[test]
    fn test_undefined_variable_error() {
        let template = Template::parse("Hello {name}").unwrap();
        let err = template.render(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "name".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn test_syntax_errors_surface_at_parse_time() {
        assert_eq!(
            Template::parse("Hello {name"),
            Err(TemplateError::UnmatchedBrace { position: 6 })
        );
        assert_eq!(
            Template::parse("Hello { }"),
            Err(TemplateError::EmptyVariableName { position: 6 })
        );
    }

    #[test]
    fn test_variables_listed_in_order() {
        let template = Template::parse("{a}{{x}}{b}{a}").unwrap();
        assert_eq!(template.variables().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let vars = vars([("v", "{other}")]);
        assert_eq!(render("[{v}]", &vars).unwrap(), "[{other}]");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UndefinedVariable {
            name: "foo".to_string(),
            position: 10,
        };
        assert_eq!(
            err.to_string(),
            "undefined variable 'foo' at position 10 in template"
        );
        assert_eq!(
            TemplateError::UnmatchedBrace { position: 5 }.to_string(),
            "unmatched '{' at position 5 in template"
        );
        assert_eq!(
            TemplateError::EmptyVariableName { position: 3 }.to_string(),
            "empty variable name '{}' at position 3 in template"
        );
    }
}
