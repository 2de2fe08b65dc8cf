use std::collections::HashMap;

use sea_orm::{EntityTrait, IdenStatic};

/// Value domain of a searchable column, used to coerce request values and to
/// pick the default legacy predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    DateTime,
}

impl FieldKind {
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field<E: EntityTrait> {
    pub column: E::Column,
    pub kind: FieldKind,
}

impl<E: EntityTrait> Field<E> {
    pub fn name(&self) -> &str {
        self.column.as_str()
    }
}

/// Allow-list of the columns of `E` that request input may reference.
///
/// Fields are registered under their column name. Anything not registered
/// (for instance a password hash) is invisible to filters and sorts.
#[derive(Debug, Clone)]
pub struct FieldRegistry<E: EntityTrait> {
    fields: HashMap<String, Field<E>>,
}

impl<E: EntityTrait> Default for FieldRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> FieldRegistry<E> {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    pub fn field(mut self, column: E::Column, kind: FieldKind) -> Self {
        self.fields
            .insert(column.as_str().to_string(), Field { column, kind });
        self
    }

    pub fn resolve(&self, name: &str) -> Option<&Field<E>> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
