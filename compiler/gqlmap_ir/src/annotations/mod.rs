//! Per-field declarative annotations.

/// Tag key naming the alternate type to compile in place of the declared one.
pub const SUBSTITUTE_KEY: &str = "replaceTypeWith";
/// Tag key for the free-text field description.
pub const DESCRIPTION_KEY: &str = "description";
/// Tag key for the `required` flag.
pub const REQUIRED_KEY: &str = "required";

/// Annotations read from a record's own field definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldAnnotations {
    pub description: Option<String>,
    /// Only effective on fields declared optional.
    pub required: bool,
    /// Name of an alternate type, resolved through the substitution hook.
    pub substitute: Option<String>,
}

impl FieldAnnotations {
    /// Parse a tag string of the form `key:"value" key:"value"`.
    ///
    /// Values may contain `\"`, `\\` and `\n` escapes. Unknown keys are
    /// ignored; parsing stops at the first malformed pair and keeps what was
    /// read up to that point.
    pub fn from_tags(tags: &str) -> Self {
        let mut annotations = Self::default();
        for (key, value) in TagPairs::new(tags) {
            match key {
                DESCRIPTION_KEY => annotations.description = Some(value),
                REQUIRED_KEY => annotations.required = value == "true",
                SUBSTITUTE_KEY if !value.is_empty() => annotations.substitute = Some(value),
                _ => {}
            }
        }
        annotations
    }
}

/// Iterator over `key:"value"` pairs.
struct TagPairs<'a> {
    rest: &'a str,
}

impl<'a> TagPairs<'a> {
    fn new(tags: &'a str) -> Self {
        Self { rest: tags }
    }
}

impl<'a> Iterator for TagPairs<'a> {
    type Item = (&'a str, String);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let Some((key, after_key)) = rest.split_once(':') else {
            tracing::warn!(tag = rest, "malformed field tag: missing ':'");
            self.rest = "";
            return None;
        };
        let Some(body) = after_key.strip_prefix('"') else {
            tracing::warn!(key, "malformed field tag: value is not quoted");
            self.rest = "";
            return None;
        };

        let mut value = String::new();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.rest = &body[i + 1..];
                    return Some((key.trim(), value));
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                other => value.push(other),
            }
        }

        tracing::warn!(key, "malformed field tag: unterminated value");
        self.rest = "";
        None
    }
}

#[cfg(test)]
mod tests;
