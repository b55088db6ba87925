//! Calibrated, immutable question set.

use std::collections::HashMap;
use std::path::Path;

use globalrank_core::errors::ItemBankError;
use globalrank_core::models::{ItemBankFile, ItemDefinition};
use tracing::info;

use crate::difficulty::derive_difficulty;

/// A question with its difficulty already derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    probability: f64,
    difficulty: f64,
    category: Option<String>,
}

impl Item {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Ordered item set with difficulties computed once at load.
///
/// Order defines positional alignment for `&[bool]` answers; the id index
/// backs explicit alignment.
#[derive(Debug, Clone, Default)]
pub struct ItemBank {
    question_set_id: Option<String>,
    items: Vec<Item>,
    difficulties: Vec<f64>,
    index: HashMap<String, usize>,
}

impl ItemBank {
    /// Calibrate a parsed item bank file.
    pub fn calibrate(file: ItemBankFile) -> Result<Self, ItemBankError> {
        let mut bank = Self::from_definitions(file.items)?;
        bank.question_set_id = file.question_set_id;
        Ok(bank)
    }

    /// Calibrate an ordered list of definitions. The first invalid
    /// probability or repeated id rejects the whole set.
    pub fn from_definitions(definitions: Vec<ItemDefinition>) -> Result<Self, ItemBankError> {
        let mut items = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for def in definitions {
            let difficulty = derive_difficulty(&def.id, def.probability)?;
            if index.insert(def.id.clone(), items.len()).is_some() {
                return Err(ItemBankError::DuplicateItem { id: def.id });
            }
            items.push(Item {
                id: def.id,
                probability: def.probability,
                difficulty,
                category: def.category,
            });
        }

        let difficulties = items.iter().map(Item::difficulty).collect();
        info!(items = items.len(), "item bank calibrated");

        Ok(Self {
            question_set_id: None,
            items,
            difficulties,
            index,
        })
    }

    /// Load and calibrate an item bank file (`.json` or `.toml`).
    pub fn load(path: &Path) -> Result<Self, ItemBankError> {
        Self::calibrate(ItemBankFile::load(path)?)
    }

    /// Replace the question set id declared by the source file.
    pub fn with_question_set_id(mut self, question_set_id: impl Into<String>) -> Self {
        self.question_set_id = Some(question_set_id.into());
        self
    }

    pub fn question_set_id(&self) -> Option<&str> {
        self.question_set_id.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Difficulties in bank order.
    pub fn difficulties(&self) -> &[f64] {
        &self.difficulties
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index_of(id).map(|i| &self.items[i])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}
