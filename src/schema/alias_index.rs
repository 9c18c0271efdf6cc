use indexmap::{IndexMap, IndexSet};

/// Lowercase column reference -> lowercase aliases it is selected under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasIndex {
    aliases: IndexMap<String, IndexSet<String>>,
}

impl AliasIndex {
    pub fn register(&mut self, column: &str, alias: &str) {
        if column.is_empty() || alias.is_empty() {
            return;
        }
        self.aliases
            .entry(column.to_lowercase())
            .or_default()
            .insert(alias.to_lowercase());
    }

    pub fn aliases_of(&self, column: &str) -> impl Iterator<Item = &String> {
        self.aliases
            .get(&column.to_lowercase())
            .into_iter()
            .flat_map(|aliases| aliases.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
