//! Token substitution for configuration values

/// Replaces named tokens (conventionally `%name%`) in string values.
///
/// Replacement is a single left-to-right pass: at each position the first
/// matching token is substituted and scanning resumes after the inserted
/// value, so substituted text is never re-matched.
#[derive(Debug, Clone, Default)]
pub struct TokenReplacer {
    tokens: Vec<(String, String)>,
}

impl TokenReplacer {
    /// Create a replacer with the given name/value pairs.
    ///
    /// Empty token names are ignored.
    pub fn new(tokens: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut replacer = Self { tokens: Vec::new() };
        for (name, value) in tokens {
            replacer.set(name, value);
        }
        replacer
    }

    /// Add or update a token.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        let value = value.into();
        match self.tokens.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.tokens.push((name, value)),
        }
    }

    /// Replace every token occurrence in `value`.
    pub fn replace(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut rest = value;
        'scan: while let Some(first) = rest.chars().next() {
            for (name, replacement) in &self.tokens {
                if rest.starts_with(name.as_str()) {
                    out.push_str(replacement);
                    rest = &rest[name.len()..];
                    continue 'scan;
                }
            }
            out.push(first);
            rest = &rest[first.len_utf8()..];
        }
        out
    }
}
