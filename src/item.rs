use serde::Deserialize;

/// An item identity plus a quantity. Recipe inputs and outputs are stacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    pub count: u16,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, count: u16) -> Self {
        Self {
            item_id: item_id.into(),
            count,
        }
    }

    /// Single item of the given identity.
    pub fn one(item_id: impl Into<String>) -> Self {
        Self::new(item_id, 1)
    }
}

/// A display icon: an item identity with an optional localized name and lore.
///
/// Produced by `Localization::get_item`. When no localized name exists the
/// host renders the bare item with its own default name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub item_id: String,
    pub name: Option<String>,
    pub lore: Vec<String>,
}

impl DisplayItem {
    /// Icon with no name override and no lore.
    pub fn bare(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: None,
            lore: Vec::new(),
        }
    }
}
