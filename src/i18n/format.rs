//! Placeholder substitution for catalog templates
//!
//! Templates use `{name}` placeholders. `{{` and `}}` produce literal braces.

use std::collections::HashMap;

use thiserror::Error;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// A template could not be formatted with the parameters supplied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing parameter '{name}' for template {template:?}")]
    MissingParameter { name: String, template: String },

    #[error("malformed template {template:?}: {reason}")]
    Malformed { template: String, reason: String },
}

/// Substitute every `{name}` in `template` with `params[name]`
pub fn format_template(template: &str, params: &TranslationParams) -> Result<String, FormatError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => return Err(malformed(template, "nested '{' in placeholder")),
                        Some(c) => name.push(c),
                        None => return Err(malformed(template, "unclosed '{'")),
                    }
                }

                if name.is_empty() {
                    return Err(malformed(template, "empty placeholder"));
                }

                match params.get(&name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(FormatError::MissingParameter {
                            name,
                            template: template.to_string(),
                        })
                    }
                }
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '}' => return Err(malformed(template, "single '}' encountered")),
            c => result.push(c),
        }
    }

    Ok(result)
}

fn malformed(template: &str, reason: &str) -> FormatError {
    FormatError::Malformed {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
