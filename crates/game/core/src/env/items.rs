use super::OracleError;
use super::RngOracle;
use crate::state::{Item, POTION_NAME};

/// Read-only list of item templates used for every item draw.
///
/// Built once from already-parsed templates and never mutated afterwards.
/// Every item handed out is an independent copy of a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCatalog {
    templates: Vec<Item>,
}

impl ItemCatalog {
    /// Wraps an ordered template list.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EmptyCatalog` if `templates` is empty; random draws
    /// need at least one template.
    pub fn new(templates: Vec<Item>) -> Result<Self, OracleError> {
        if templates.is_empty() {
            return Err(OracleError::EmptyCatalog);
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Item] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Draws a template uniformly at random and returns a copy of it.
    pub fn generate_item(&self, rng: &mut dyn RngOracle) -> Item {
        let index = rng.pick_index(self.templates.len());
        self.templates[index].clone()
    }

    /// Copy of the potion template, or `None` if the catalog lacks one.
    pub fn potion(&self) -> Option<Item> {
        self.find(POTION_NAME)
    }

    /// Copy of the first template with exactly this name.
    pub fn find(&self, name: &str) -> Option<Item> {
        self.templates
            .iter()
            .find(|item| item.name() == name)
            .cloned()
    }
}
