//! Item catalog loader.

use std::path::Path;

use game_core::{Item, ItemCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// (
///     items: [
///         (name: "Health Potion", value: 25, image: "./images/items/potion.png"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemCatalogRon {
    items: Vec<Item>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item templates from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse item templates from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(catalog.items)
    }

    /// Load a ready-to-draw catalog, rejecting an empty template list.
    pub fn load_catalog(path: &Path) -> LoadResult<ItemCatalog> {
        let items = Self::load(path)?;
        ItemCatalog::new(items)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_templates_in_order() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (name: "Rusty Dagger", value: 2, image: "dagger.png"),
                    (name: "Health Potion", value: 25, image: "potion.png"),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new("Rusty Dagger", 2, "dagger.png"));
        assert!(items[1].is_potion());
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let err = ItemLoader::parse("(items: [(name: \"x\")])").unwrap_err();
        assert!(err.to_string().contains("item catalog RON"));
    }
}
