//! Ingredient model definition.

use serde::{Deserialize, Serialize};

/// One line of the recipe's ingredient checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Unique identifier within the recipe
    pub id: String,

    /// Display name, e.g. "Fresh mozzarella"
    pub name: String,

    /// Free-form quantity text, e.g. "250g" or "to taste"
    pub amount: String,

    /// Whether the cook has gathered this ingredient
    #[serde(default)]
    pub checked: bool,
}

impl Ingredient {
    /// Creates an unchecked ingredient.
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: amount.into(),
            checked: false,
        }
    }
}
