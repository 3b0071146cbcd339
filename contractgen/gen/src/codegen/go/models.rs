//! Building blocks shared by the Go request, response and client models.

use std::cmp::Ordering;

use serde::Serialize;

/// A name/type pair: constructor argument, struct field or setter parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    pub name: String,
    pub go_type: String,
}

impl Arg {
    pub fn new(name: impl Into<String>, go_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            go_type: go_type.into(),
        }
    }

    /// `name type`, as written in a Go parameter list or struct body.
    pub fn declaration(&self) -> String {
        format!("{} {}", self.name, self.go_type)
    }
}

/// `receiver.field = value` inside a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

impl Assignment {
    /// Assigns a constructor argument to the field of the same name.
    pub fn simple(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            field: name,
        }
    }

    pub fn valued(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A query parameter set by a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub key: String,
    /// Go expression producing the string value.
    pub value: String,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn field_rank(name: &str) -> u8 {
    match name.to_lowercase().as_str() {
        "bucket" | "bucketname" => 0,
        "object" | "objectname" => 1,
        _ => 2,
    }
}

/// Fixed field order: bucket name, object name, then case-insensitive
/// alphabetical.
pub fn compare_field_names(a: &str, b: &str) -> Ordering {
    field_rank(a)
        .cmp(&field_rank(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Sorts with [`compare_field_names`] and drops later duplicates by name.
pub fn sort_and_dedup(args: Vec<Arg>) -> Vec<Arg> {
    let mut unique: Vec<Arg> = Vec::with_capacity(args.len());
    for arg in args {
        if !unique.iter().any(|a| a.name == arg.name) {
            unique.push(arg);
        }
    }
    unique.sort_by(|a, b| compare_field_names(&a.name, &b.name));
    unique
}
