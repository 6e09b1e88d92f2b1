//! Translation catalog
//!
//! A catalog holds one nested text tree per language code. Trees are parsed
//! from a JSON document whose top-level keys are language codes:
//!
//! ```json
//! { "en": { "language_selector": { "title": "Choose your language" } } }
//! ```
//!
//! Each language is validated on its own. A language with a bad tree is left
//! out and recorded in [`Catalog::rejected`]; the others still load.
//!
//! A catalog is never mutated after it is built; reloading produces a new one.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Catalog source could not be turned into a catalog
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("catalog source not found: {path}")]
    NotFound { path: String },

    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid catalog entry at '{path}': {reason}")]
    InvalidShape { path: String, reason: String },
}

/// A node of a language tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

/// Immutable set of language trees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    languages: BTreeMap<String, Node>,
    rejected: BTreeMap<String, String>,
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub languages: Vec<LanguageStats>,
    /// Leaf count of the reference language
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

impl Catalog {
    /// A catalog in which every key misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(LoadError::NotFound { path: display });
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io { path: display.clone(), source })?;

        let catalog = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            languages = catalog.languages.len(),
            rejected = catalog.rejected.len(),
            "Parsed catalog source"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a catalog from an already parsed JSON document
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(LoadError::InvalidShape {
                    path: String::new(),
                    reason: format!("expected an object of languages, found {}", kind_of(&other)),
                })
            }
        };

        let mut languages = BTreeMap::new();
        let mut rejected = BTreeMap::new();
        for (code, tree) in root {
            match language_from_value(&code, tree) {
                Ok(node) => {
                    languages.insert(code, node);
                }
                Err(e) => {
                    warn!(language = %code, error = %e, "Skipping invalid catalog language");
                    rejected.insert(code, e.to_string());
                }
            }
        }

        Ok(Self { languages, rejected })
    }

    /// Codes that currently have a tree
    pub fn languages(&self) -> BTreeSet<String> {
        self.languages.keys().cloned().collect()
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Codes left out at load time, with the reason
    pub fn rejected(&self) -> &BTreeMap<String, String> {
        &self.rejected
    }

    /// Walk `key` through the tree of `language`
    pub fn node(&self, key: &str, language: &str) -> Option<&Node> {
        let mut current = self.languages.get(language)?;

        for segment in key.split('.') {
            current = match current {
                Node::Branch(children) => children.get(segment)?,
                Node::Leaf(_) => return None,
            };
        }

        Some(current)
    }

    /// Leaf text at `key` in `language`, without any fallback
    pub fn lookup(&self, key: &str, language: &str) -> Option<&str> {
        match self.node(key, language)? {
            Node::Leaf(text) => Some(text),
            Node::Branch(_) => None,
        }
    }

    /// Dot paths of every leaf in `language`, sorted
    pub fn leaf_paths(&self, language: &str) -> Vec<String> {
        let mut paths = Vec::new();
        if let Some(Node::Branch(children)) = self.languages.get(language) {
            collect_paths(children, "", &mut paths);
        }
        paths
    }

    /// Leaf paths of `reference` that `language` cannot resolve itself
    pub fn missing_keys(&self, reference: &str, language: &str) -> Vec<String> {
        self.leaf_paths(reference)
            .into_iter()
            .filter(|path| self.lookup(path, language).is_none())
            .collect()
    }

    /// Get translation statistics relative to `reference_language`
    pub fn stats(&self, reference_language: &str) -> CatalogStats {
        let mut stats = CatalogStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for (code, tree) in &self.languages {
            let key_count = count_leaves(tree);
            stats.languages.push(LanguageStats {
                code: code.clone(),
                key_count,
            });
            if code == reference_language {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

fn language_from_value(code: &str, tree: Value) -> Result<Node, LoadError> {
    if !matches!(tree, Value::Object(_)) {
        return Err(LoadError::InvalidShape {
            path: code.to_string(),
            reason: format!("expected an object, found {}", kind_of(&tree)),
        });
    }
    node_from_value(code, tree)
}

fn node_from_value(path: &str, value: Value) -> Result<Node, LoadError> {
    match value {
        Value::String(text) => Ok(Node::Leaf(text)),
        Value::Object(map) => {
            let mut children = BTreeMap::new();
            for (segment, child) in map {
                let child_path = format!("{}.{}", path, segment);
                if segment.is_empty() || segment.contains('.') {
                    return Err(LoadError::InvalidShape {
                        path: child_path,
                        reason: "keys must be non-empty and must not contain '.'".to_string(),
                    });
                }
                let node = node_from_value(&child_path, child)?;
                children.insert(segment, node);
            }
            Ok(Node::Branch(children))
        }
        other => Err(LoadError::InvalidShape {
            path: path.to_string(),
            reason: format!("expected text or an object, found {}", kind_of(&other)),
        }),
    }
}

fn collect_paths(children: &BTreeMap<String, Node>, prefix: &str, paths: &mut Vec<String>) {
    for (segment, node) in children {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };
        match node {
            Node::Leaf(_) => paths.push(path),
            Node::Branch(nested) => collect_paths(nested, &path, paths),
        }
    }
}

/// Recursively count translation leaves
fn count_leaves(node: &Node) -> usize {
    match node {
        Node::Leaf(_) => 1,
        Node::Branch(children) => children.values().map(count_leaves).sum(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
