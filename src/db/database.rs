use std::collections::HashSet;

use rand::{
    seq::{IndexedRandom, IteratorRandom},
    Rng,
};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, warn};

use crate::{
    items::item::{Item, ItemId, ItemType, Rarity},
    random::distribution::random_choice_from_distribution,
};

#[derive(Debug)]
pub enum DatabaseError {
    DuplicateId(ItemId, String),
    Load(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Load(err)
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Parse(err)
    }
}

/// Derived (type, rarity) index. Cells hold slots into the item vec, so
/// every declared pair has a cell at all times, empty or not.
type IndexTable = [[Vec<usize>; Rarity::COUNT]; ItemType::COUNT];

fn empty_index() -> IndexTable {
    std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()))
}

/// Catalog of authored items with a rebuildable (type, rarity) index and
/// rarity-weighted random draws on top of it.
///
/// Draw operations take the random source as an argument so callers can
/// seed it; the database itself holds no randomness.
#[derive(Debug, Clone)]
pub struct ItemDatabase {
    items: Vec<Item>,
    rarity_weights: Vec<f32>,
    index: IndexTable,
}

impl ItemDatabase {
    pub fn new(items: Vec<Item>, rarity_weights: Vec<f32>) -> Result<Self, DatabaseError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(DatabaseError::DuplicateId(item.id, item.name.clone()));
            }
        }

        let mut db = Self {
            items: items.into_iter().map(sanitize).collect(),
            rarity_weights,
            index: empty_index(),
        };
        db.rebuild_index();
        Ok(db)
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            rarity_weights: Vec::new(),
            index: empty_index(),
        }
    }

    /// Rebuilds the index from scratch: every (type, rarity) cell is reset,
    /// every item is inserted into its cell, and each cell is stable-sorted
    /// by the rarity preorder so equal-rarity items keep authored order.
    ///
    /// Idempotent; the authoring boundary calls this whenever the item list
    /// changes, and every constructor calls it once.
    pub fn rebuild_index(&mut self) {
        for row in self.index.iter_mut() {
            for cell in row.iter_mut() {
                cell.clear();
            }
        }

        for (slot, item) in self.items.iter().enumerate() {
            self.index[item.kind as usize][item.rarity as usize].push(slot);
        }

        let items = &self.items;
        for row in self.index.iter_mut() {
            for cell in row.iter_mut() {
                cell.sort_by(|&a, &b| items[a].cmp_rarity(&items[b]));
            }
        }

        debug!(items = self.items.len(), "item index rebuilt");
    }

    /// Appends an item and rebuilds the index. Ids are immutable and unique
    /// within a catalog, so a duplicate is rejected.
    pub fn insert(&mut self, item: Item) -> Result<(), DatabaseError> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(DatabaseError::DuplicateId(item.id, item.name));
        }
        self.items.push(sanitize(item));
        self.rebuild_index();
        Ok(())
    }

    pub fn set_rarity_weights(&mut self, weights: Vec<f32>) {
        self.rarity_weights = weights;
    }

    pub fn rarity_weights(&self) -> &[f32] {
        &self.rarity_weights
    }

    /// Copy of the configured weight vector, truncated to at most one entry
    /// per declared rarity. A shorter vector is used as-is: the weighted
    /// draw can never produce an index past its end, so missing tail
    /// entries are zero weight.
    pub fn valid_weights(&self) -> Vec<f32> {
        let mut weights = self.rarity_weights.clone();
        if weights.len() > Rarity::COUNT {
            warn!(
                configured = weights.len(),
                rarities = Rarity::COUNT,
                "more rarity weights than rarities; extra entries dropped"
            );
            weights.truncate(Rarity::COUNT);
        }
        weights
    }

    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Name lookup restricted to one type, scanning that type's indexed
    /// cells across all rarities.
    pub fn item_by_name_of_type(&self, name: &str, kind: ItemType) -> Option<&Item> {
        self.index[kind as usize]
            .iter()
            .flatten()
            .map(|&slot| &self.items[slot])
            .find(|item| item.name == name)
    }

    /// Snapshot copy of the full catalog.
    pub fn all_items(&self) -> Vec<Item> {
        self.items.to_vec()
    }

    /// Items indexed under exactly (kind, rarity), in index order.
    pub fn items_of(&self, kind: ItemType, rarity: Rarity) -> Vec<&Item> {
        self.cell(kind, rarity)
            .iter()
            .map(|&slot| &self.items[slot])
            .collect()
    }

    /// Any item from the database: a uniformly random type, retried up to
    /// `type_count * 3` times until some type yields an item.
    pub fn random_item(&self, rng: &mut impl Rng) -> Option<&Item> {
        let attempts = ItemType::COUNT * 3;
        for _ in 0..attempts {
            let kind = ItemType::iter().choose(rng)?;
            if let Some(item) = self.random_item_of_type(kind, rng) {
                return Some(item);
            }
        }
        None
    }

    /// An item of the given type: rarity drawn from the configured weight
    /// distribution, then a uniform pick within (kind, rarity). An empty
    /// cell or a degenerate distribution yields `None`, not a retry.
    pub fn random_item_of_type(&self, kind: ItemType, rng: &mut impl Rng) -> Option<&Item> {
        let weights = self.valid_weights();
        let rarity_index = random_choice_from_distribution(&weights, rng)?;
        let rarity = Rarity::iter().nth(rarity_index)?;
        self.pick_uniform(kind, rarity, rng)
    }

    /// Uniform pick within exactly (kind, rarity).
    pub fn random_item_of_type_and_rarity(
        &self,
        kind: ItemType,
        rarity: Rarity,
        rng: &mut impl Rng,
    ) -> Option<&Item> {
        self.pick_uniform(kind, rarity, rng)
    }

    /// Uniform pick of (random type, given rarity).
    pub fn random_item_of_rarity(&self, rarity: Rarity, rng: &mut impl Rng) -> Option<&Item> {
        let kind = ItemType::iter().choose(rng)?;
        self.pick_uniform(kind, rarity, rng)
    }

    /// An item of a uniformly random type whose rarity is one of the given
    /// candidates, biased by the configured weight distribution.
    pub fn random_item_from_rarities(
        &self,
        rarities: &[Rarity],
        rng: &mut impl Rng,
    ) -> Option<&Item> {
        let kind = ItemType::iter().choose(rng)?;
        self.candidate_from_rarities(kind, rarities, rng)
    }

    /// One candidate per type in `kinds` via the rarity-list procedure,
    /// then a uniform pick among the accumulated candidates.
    pub fn random_item_from_pools(
        &self,
        kinds: &[ItemType],
        rarities: &[Rarity],
        rng: &mut impl Rng,
    ) -> Option<&Item> {
        let mut picks = Vec::new();
        for &kind in kinds {
            if let Some(item) = self.candidate_from_rarities(kind, rarities, rng) {
                picks.push(item);
            }
        }
        picks.choose(rng).copied()
    }

    /// One uniform pick from each non-empty (kind, rarity) cell named in
    /// `rarities`, then the weighted distribution selects among those
    /// candidates. The distribution is sized for the full rarity range, so
    /// an out-of-bounds draw keeps the first candidate; this mirrors the
    /// original authoring tool's behaviour rather than re-deriving weights
    /// for the candidate list.
    fn candidate_from_rarities(
        &self,
        kind: ItemType,
        rarities: &[Rarity],
        rng: &mut impl Rng,
    ) -> Option<&Item> {
        let mut candidates = Vec::new();
        for &rarity in rarities {
            if let Some(item) = self.pick_uniform(kind, rarity, rng) {
                candidates.push(item);
            }
        }

        let weights = self.valid_weights();
        match random_choice_from_distribution(&weights, rng) {
            Some(index) if index < candidates.len() => Some(candidates[index]),
            _ => candidates.first().copied(),
        }
    }

    fn cell(&self, kind: ItemType, rarity: Rarity) -> &[usize] {
        &self.index[kind as usize][rarity as usize]
    }

    fn pick_uniform(&self, kind: ItemType, rarity: Rarity, rng: &mut impl Rng) -> Option<&Item> {
        self.cell(kind, rarity)
            .choose(rng)
            .map(|&slot| &self.items[slot])
    }
}

/// Authored item fields outside their invariants are tolerated with a
/// warning, not rejected: stacks clamp to at least one, weights to a
/// finite non-negative number.
fn sanitize(mut item: Item) -> Item {
    if item.max_stack == 0 {
        warn!(name = %item.name, "max_stack of 0 clamped to 1");
        item.max_stack = 1;
    }
    if !item.weight.is_finite() || item.weight < 0.0 {
        warn!(name = %item.name, weight = item.weight, "invalid weight clamped to 0");
        item.weight = 0.0;
    }
    item
}
