// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editor tokenizer definition.
//!
//! The backend encodes regular expressions as strings wrapped in slashes
//! (`"/[a-z]+/"`). Only that exact form is recognized: a leading `/`, a
//! trailing `/`, and at least one character between. Flags (`/x/i`) are not
//! part of the grammar, so such strings stay plain text.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Errors converting a syntax definition
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("invalid pattern {pattern:?} at {path}: {source}")]
    InvalidPattern {
        pattern: String,
        path: String,
        #[source]
        source: regex::Error,
    },
}

/// Converted syntax definition node
#[derive(Debug, Clone)]
pub enum SyntaxNode {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Pattern(Regex),
    List(Vec<SyntaxNode>),
    Map(IndexMap<String, SyntaxNode>),
}

/// Return the pattern body of a `/pattern/` string.
pub fn pattern_body(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('/')?.strip_suffix('/')?;
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Syntax definition with all slash-wrapped strings compiled
#[derive(Debug, Clone)]
pub struct SyntaxDefinition {
    root: SyntaxNode,
}

impl SyntaxDefinition {
    pub fn from_json(value: &Value) -> Result<Self, SyntaxError> {
        Ok(Self { root: convert(value, "$")? })
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Look up a top-level entry (e.g. `tokenizer`).
    pub fn get(&self, key: &str) -> Option<&SyntaxNode> {
        match &self.root {
            SyntaxNode::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn pattern_count(&self) -> usize {
        count(&self.root, &|n| matches!(n, SyntaxNode::Pattern(_)))
    }

    pub fn text_count(&self) -> usize {
        count(&self.root, &|n| matches!(n, SyntaxNode::Text(_)))
    }
}

fn convert(value: &Value, path: &str) -> Result<SyntaxNode, SyntaxError> {
    Ok(match value {
        Value::Null => SyntaxNode::Null,
        Value::Bool(b) => SyntaxNode::Bool(*b),
        Value::Number(n) => SyntaxNode::Number(n.clone()),
        Value::String(s) => match pattern_body(s) {
            Some(body) => SyntaxNode::Pattern(Regex::new(body).map_err(|source| {
                SyntaxError::InvalidPattern { pattern: s.clone(), path: path.to_string(), source }
            })?),
            None => SyntaxNode::Text(s.clone()),
        },
        Value::Array(items) => SyntaxNode::List(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| convert(v, &format!("{}[{}]", path, i)))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(fields) => SyntaxNode::Map(
            fields
                .iter()
                .map(|(k, v)| Ok((k.clone(), convert(v, &format!("{}.{}", path, k))?)))
                .collect::<Result<_, SyntaxError>>()?,
        ),
    })
}

fn count(node: &SyntaxNode, pred: &dyn Fn(&SyntaxNode) -> bool) -> usize {
    let nested = match node {
        SyntaxNode::List(items) => items.iter().map(|n| count(n, pred)).sum(),
        SyntaxNode::Map(map) => map.values().map(|n| count(n, pred)).sum(),
        _ => 0,
    };
    nested + usize::from(pred(node))
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
