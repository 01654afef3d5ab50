use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    db::database::{DatabaseError, ItemDatabase},
    items::item::Item,
};

/// JSON form of an authored database: the item list plus the per-rarity
/// weight vector, exactly as the authoring tool writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseDefinition {
    pub items: Vec<Item>,
    #[serde(default)]
    pub rarity_weights: Vec<f32>,
}

impl DatabaseDefinition {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl TryFrom<DatabaseDefinition> for ItemDatabase {
    type Error = DatabaseError;

    fn try_from(definition: DatabaseDefinition) -> Result<Self, Self::Error> {
        ItemDatabase::new(definition.items, definition.rarity_weights)
    }
}

impl ItemDatabase {
    /// Builds a database from a single definition file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        DatabaseDefinition::load_from_file(path)?.try_into()
    }

    /// Builds a database from a directory of one-item-per-file JSON assets.
    /// Non-JSON files are ignored; files that fail to parse are logged and
    /// skipped so one bad asset does not take the whole catalog down.
    pub fn load_items_from_directory(
        directory: impl AsRef<Path>,
        rarity_weights: Vec<f32>,
    ) -> Result<Self, DatabaseError> {
        let mut items = Vec::new();
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str::<Item>(&contents) {
                Ok(item) => items.push(item),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unparseable item file");
                }
            }
        }

        ItemDatabase::new(items, rarity_weights)
    }
}
