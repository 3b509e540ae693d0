// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Action vocabulary for generated ledger operations
//!
//! Every top-level field of a mutation document is named `<verb><Type>`,
//! e.g. `addAnimal` or `update_Event`. This module owns the closed verb set,
//! the classification predicates downstream consumers rely on, and the
//! matcher that splits a field name into verb and type name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Optional separator between the verb and the type name (`add_Animal`)
pub const ACTION_SEPARATOR: char = '_';

/// Action verbs generated for ledger types, in declaration order
///
/// No verb is a prefix of another, so at most one verb can prefix a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionVerb {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "create")]
    Create,
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "get")]
    Get,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "onAdd")]
    OnAdd,
    #[serde(rename = "onCreate")]
    OnCreate,
    #[serde(rename = "onDelete")]
    OnDelete,
    #[serde(rename = "onRemove")]
    OnRemove,
    #[serde(rename = "onUpdate")]
    OnUpdate,
    #[serde(rename = "put")]
    Put,
    #[serde(rename = "remove")]
    Remove,
    #[serde(rename = "update")]
    Update,
}

impl ActionVerb {
    /// All verbs in declaration order
    pub const ALL: [ActionVerb; 13] = [
        ActionVerb::Add,
        ActionVerb::Create,
        ActionVerb::Delete,
        ActionVerb::Get,
        ActionVerb::List,
        ActionVerb::OnAdd,
        ActionVerb::OnCreate,
        ActionVerb::OnDelete,
        ActionVerb::OnRemove,
        ActionVerb::OnUpdate,
        ActionVerb::Put,
        ActionVerb::Remove,
        ActionVerb::Update,
    ];

    /// Verb text as it appears in field names
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionVerb::Add => "add",
            ActionVerb::Create => "create",
            ActionVerb::Delete => "delete",
            ActionVerb::Get => "get",
            ActionVerb::List => "list",
            ActionVerb::OnAdd => "onAdd",
            ActionVerb::OnCreate => "onCreate",
            ActionVerb::OnDelete => "onDelete",
            ActionVerb::OnRemove => "onRemove",
            ActionVerb::OnUpdate => "onUpdate",
            ActionVerb::Put => "put",
            ActionVerb::Remove => "remove",
            ActionVerb::Update => "update",
        }
    }

    /// Returns true if the action updates an object in the ledger
    pub fn is_update(&self) -> bool {
        matches!(self, ActionVerb::Update | ActionVerb::Put)
    }

    /// Returns true if the action applies to an object already in world state
    pub fn is_object_mutation(&self) -> bool {
        matches!(
            self,
            ActionVerb::Delete | ActionVerb::Update | ActionVerb::Put | ActionVerb::Remove
        )
    }

    /// Returns true if the action is legal in a mutation document
    pub fn is_mutation_operation(&self) -> bool {
        matches!(
            self,
            ActionVerb::Add
                | ActionVerb::Create
                | ActionVerb::Delete
                | ActionVerb::Update
                | ActionVerb::Put
                | ActionVerb::Remove
        )
    }

    /// Returns true if the action is a subscription operation
    pub fn is_subscription(&self) -> bool {
        matches!(
            self,
            ActionVerb::OnAdd
                | ActionVerb::OnCreate
                | ActionVerb::OnDelete
                | ActionVerb::OnRemove
                | ActionVerb::OnUpdate
        )
    }

    /// Returns true if the action deletes objects from world state
    pub fn is_delete(&self) -> bool {
        matches!(self, ActionVerb::Delete | ActionVerb::Remove)
    }
}

impl fmt::Display for ActionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionVerb {
    type Err = DecomposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionVerb::ALL
            .iter()
            .copied()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| DecomposeError::UnknownAction(s.to_string()))
    }
}

/// Operation name decomposition error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error("Operation '{0}' does not start with a known action verb")]
    UnknownAction(String),
}

/// `^(add|create|...|update)_?(.*)$`, alternation in declaration order
static ACTION_PARSER: Lazy<Regex> = Lazy::new(|| {
    let verbs = ActionVerb::ALL
        .iter()
        .map(|verb| regex::escape(verb.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        "^({}){}?(.*)$",
        verbs,
        regex::escape(&ACTION_SEPARATOR.to_string())
    );
    Regex::new(&pattern).expect("action verb pattern is a valid regex")
});

/// Split a field name into its action verb and type name
///
/// Matching is case-sensitive. The type name is the untouched remainder
/// after the verb and an optional [`ACTION_SEPARATOR`].
pub fn decompose_operation_name(name: &str) -> Result<(ActionVerb, &str), DecomposeError> {
    let captures = ACTION_PARSER
        .captures(name)
        .ok_or_else(|| DecomposeError::UnknownAction(name.to_string()))?;

    let (Some(verb), Some(typename)) = (captures.get(1), captures.get(2)) else {
        return Err(DecomposeError::UnknownAction(name.to_string()));
    };

    let verb = verb.as_str().parse::<ActionVerb>()?;
    log::debug!(
        "Decomposed operation '{}' into action '{}' on type '{}'",
        name,
        verb,
        typename.as_str()
    );
    Ok((verb, typename.as_str()))
}
