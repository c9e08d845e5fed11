//! Positional path templates.
//!
//! Templates are literal text interspersed with `{N}` placeholders, where `N`
//! indexes the components supplied at call time:
//!
//! - `customers/{0}` - single component
//! - `customers/{0}/subscriptions/{1}` - two components
//!
//! Each component is URL-escaped on its own before substitution, so reserved
//! characters inside an identifier (`/`, `?`, `#`, `%`) can never spill into
//! neighbouring segments.
//!
//! # Example
//!
//! ```rust
//! use partner_center::registry::PathTemplate;
//!
//! let template = PathTemplate::parse("customers/{0}/subscriptions/{1}").unwrap();
//! assert_eq!(template.arity(), 2);
//!
//! let path = template.resolve(&["cust-1", "sub/9"]).unwrap();
//! assert_eq!(path, "customers/cust-1/subscriptions/sub%2F9");
//! ```

use std::fmt;

use crate::registry::RegistryError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(usize),
}

/// A parsed path template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    arity: usize,
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// Placeholders must be `{0}` through `{n-1}`, each appearing exactly
    /// once, and braces must not appear outside placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidTemplate`] if the template is malformed.
    pub fn parse(template: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(d) if d.is_ascii_digit() => digits.push(d),
                            Some(other) => {
                                return Err(invalid(format!(
                                    "unexpected '{other}' inside placeholder"
                                )))
                            }
                            None => return Err(invalid("unterminated placeholder".to_string())),
                        }
                    }
                    if digits.is_empty() {
                        return Err(invalid("empty placeholder".to_string()));
                    }
                    let index = digits.parse::<usize>().map_err(|_| {
                        invalid(format!("placeholder index {{{digits}}} is out of range"))
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(index));
                }
                '}' => return Err(invalid("unmatched '}'".to_string())),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let mut indices: Vec<usize> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder(i) => Some(*i),
                Segment::Literal(_) => None,
            })
            .collect();
        let arity = indices.len();
        indices.sort_unstable();
        if indices.iter().copied().ne(0..arity) {
            return Err(invalid(format!(
                "placeholders must be {{0}}..{{{}}} each used once",
                arity.saturating_sub(1)
            )));
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
            arity,
        })
    }

    /// Returns the number of placeholders.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the template text as it was registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitutes `components` into the template, escaping each one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TemplateArityMismatch`] if the number of
    /// components differs from [`arity`](Self::arity). Nothing is truncated
    /// or ignored.
    pub fn resolve<S: AsRef<str>>(&self, components: &[S]) -> Result<String, RegistryError> {
        if components.len() != self.arity {
            return Err(RegistryError::TemplateArityMismatch {
                template: self.raw.clone(),
                expected: self.arity,
                actual: components.len(),
            });
        }

        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(i) => {
                    path.push_str(&urlencoding::encode(components[*i].as_ref()));
                }
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Verify PathTemplate is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PathTemplate>();
};
