//! Menu catalog types.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A sellable item with its remaining stock.
///
/// `available_qty` is only ever changed inside the menu actor, either by an
/// admin upsert or through the `Reserve`/`Release` actions. Being `u32` it
/// cannot go negative; `Reserve` refuses instead of underflowing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    /// Unique, trimmed, non-empty. The upsert key.
    pub name: String,
    pub price: f64,
    pub available_qty: u32,
}

/// Public upsert payload (`POST /menu` in the external surface).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpsert {
    pub name: String,
    pub price: f64,
    pub available_qty: u32,
}

/// Create params handed to the actor once the upsert found no existing item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub available_qty: u32,
}

/// Update params for an existing item (the replace half of the upsert).
#[derive(Debug, Clone)]
pub struct MenuItemUpdate {
    pub price: Option<f64>,
    pub available_qty: Option<u32>,
}

/// Query filter for the menu actor.
#[derive(Debug, Clone)]
pub enum MenuFilter {
    All,
    ByName(String),
}
