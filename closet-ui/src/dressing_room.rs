//! Outfit composition engine
//!
//! Maintains the working outfit draft: the ordered layering sequence, the
//! foot style, and whether the draft has been persisted yet. All
//! operations are explicit state transitions invoked by the caller; the
//! engine never observes storage or UI state. The caller persists after
//! each mutation: a fresh draft is inserted lazily the first time its
//! sequence becomes non-empty, and live-edited in place from then on.

use closet_common::catalog::FootStyle;
use closet_common::db::models::{ClothingItem, Outfit, DEFAULT_OUTFIT_TITLE};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Hair assets offered by the dressing room
pub const AVAILABLE_HAIRSTYLES: [&str; 7] = [
    "hair_default",
    "hair_half_up_half_down",
    "hair_low_pony",
    "hair_high_pony",
    "hair_straight",
    "hair_wavy",
    "hair_two_braids",
];

/// An outfit draft being edited in the dressing room
#[derive(Debug, Clone)]
pub struct WorkingOutfit {
    outfit: Outfit,
    persisted: bool,
}

impl WorkingOutfit {
    /// Start a brand-new draft, optionally pre-dated and pre-titled
    ///
    /// The draft is not persisted until it gains its first item.
    pub fn new_draft(initial_date: Option<DateTime<Utc>>, initial_title: Option<&str>) -> Self {
        let title = match initial_title {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => DEFAULT_OUTFIT_TITLE.to_string(),
        };
        let mut outfit = Outfit::new(title);
        outfit.date = initial_date;
        Self {
            outfit,
            persisted: false,
        }
    }

    /// Load a previously saved outfit for editing
    pub fn from_saved(outfit: Outfit) -> Self {
        Self {
            outfit,
            persisted: true,
        }
    }

    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Whether the lazy first insert is due: never yet persisted, and the
    /// sequence is non-empty. Zero-item drafts are never committed.
    pub fn needs_insert(&self) -> bool {
        !self.persisted && !self.outfit.item_ids.is_empty()
    }

    /// Record that the draft has been inserted; subsequent mutations
    /// update in place.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    /// Toggle an item in the layering sequence
    ///
    /// Removes the first occurrence if present, otherwise appends to the
    /// end. The sequence never holds duplicates.
    pub fn toggle_item(&mut self, item_id: Uuid) {
        match self.outfit.item_ids.iter().position(|id| *id == item_id) {
            Some(index) => {
                self.outfit.item_ids.remove(index);
            }
            None => self.outfit.item_ids.push(item_id),
        }
    }

    /// Stable list-move: the element at `from` ends up at index `to`
    /// (clamped), all other relative order preserved. Out-of-range `from`
    /// is a no-op.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.outfit.item_ids.len() {
            return;
        }
        let id = self.outfit.item_ids.remove(from);
        let to = to.min(self.outfit.item_ids.len());
        self.outfit.item_ids.insert(to, id);
    }

    /// Remove items at the given indices in one atomic update
    ///
    /// Indices are interpreted against the pre-removal sequence;
    /// duplicates and out-of-range indices are ignored.
    pub fn remove_items(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|i| *i < self.outfit.item_ids.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        for index in sorted.into_iter().rev() {
            self.outfit.item_ids.remove(index);
        }
    }

    /// Change the foot style, evicting incompatible items
    ///
    /// Eviction runs only on an actual change; setting the current style
    /// is a no-op and never touches the sequence. On a change, every id
    /// whose catalog item is incompatible with the new style is dropped.
    /// Ids with no matching catalog item are retained; missing items are
    /// resolved at read time instead.
    pub fn set_foot_style(&mut self, style: FootStyle, catalog: &[ClothingItem]) {
        if style == self.outfit.foot_style {
            return;
        }
        self.outfit.foot_style = style;
        self.outfit.item_ids.retain(|id| {
            match catalog.iter().find(|item| item.id == *id) {
                Some(item) => item.is_compatible(style),
                None => true,
            }
        });
    }

    /// Change the hair asset
    pub fn set_hair(&mut self, asset: impl Into<String>) {
        self.outfit.hair_asset = asset.into();
    }

    /// Apply the save-sheet fields
    ///
    /// A blank title falls back to the default. Tags are passed through
    /// as parsed by the caller.
    pub fn apply_save(
        &mut self,
        title: &str,
        tags: Vec<String>,
        date: Option<DateTime<Utc>>,
        trip_id: Option<Uuid>,
    ) {
        let trimmed = title.trim();
        self.outfit.title = if trimmed.is_empty() {
            DEFAULT_OUTFIT_TITLE.to_string()
        } else {
            trimmed.to_string()
        };
        self.outfit.tags = tags;
        self.outfit.date = date;
        self.outfit.trip_id = trip_id;
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_common::catalog::ClothingCategory;

    fn item_with_styles(styles: Option<Vec<FootStyle>>) -> ClothingItem {
        let mut item = ClothingItem::new("Item", ClothingCategory::Shoes);
        item.supported_foot_styles = styles;
        item
    }

    fn draft_with_ids(ids: &[Uuid]) -> WorkingOutfit {
        let mut draft = WorkingOutfit::new_draft(None, None);
        for id in ids {
            draft.toggle_item(*id);
        }
        draft
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = WorkingOutfit::new_draft(None, None);
        assert_eq!(draft.outfit().title, "Outfit");
        assert_eq!(draft.outfit().foot_style, FootStyle::Flat);
        assert!(!draft.is_persisted());
        assert!(!draft.needs_insert());
    }

    #[test]
    fn test_blank_initial_title_falls_back() {
        let draft = WorkingOutfit::new_draft(None, Some("   "));
        assert_eq!(draft.outfit().title, "Outfit");

        let titled = WorkingOutfit::new_draft(None, Some("Outfit 06/03/25"));
        assert_eq!(titled.outfit().title, "Outfit 06/03/25");
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let id = Uuid::new_v4();
        let mut draft = WorkingOutfit::new_draft(None, None);

        draft.toggle_item(id);
        assert_eq!(draft.outfit().item_ids, vec![id]);

        draft.toggle_item(id);
        assert!(draft.outfit().item_ids.is_empty());
    }

    #[test]
    fn test_toggle_is_own_inverse_preserving_order() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut draft = draft_with_ids(&ids);

        let other = Uuid::new_v4();
        draft.toggle_item(other);
        draft.toggle_item(other);
        assert_eq!(draft.outfit().item_ids, ids);

        // Toggling an existing id twice restores it at the END, but
        // relative order of the remaining ids never changes
        draft.toggle_item(ids[1]);
        assert_eq!(draft.outfit().item_ids, vec![ids[0], ids[2], ids[3]]);
        draft.toggle_item(ids[1]);
        assert_eq!(draft.outfit().item_ids, vec![ids[0], ids[2], ids[3], ids[1]]);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let id = Uuid::new_v4();
        let mut draft = WorkingOutfit::new_draft(None, None);
        draft.toggle_item(id);
        draft.toggle_item(id);
        draft.toggle_item(id);
        assert_eq!(draft.outfit().item_ids, vec![id]);
    }

    #[test]
    fn test_move_item_preserves_length_and_multiset() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let mut draft = draft_with_ids(&ids);

        draft.move_item(1, 3);
        let moved = &draft.outfit().item_ids;
        assert_eq!(moved.len(), ids.len());
        for id in &ids {
            assert!(moved.contains(id));
        }
        assert_eq!(*moved, vec![ids[0], ids[2], ids[3], ids[1], ids[4]]);
    }

    #[test]
    fn test_move_item_backward() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let mut draft = draft_with_ids(&ids);

        draft.move_item(3, 0);
        assert_eq!(
            draft.outfit().item_ids,
            vec![ids[3], ids[0], ids[1], ids[2]]
        );
    }

    #[test]
    fn test_move_item_out_of_range_is_noop() {
        let ids: Vec<Uuid> = (0..2).map(|_| Uuid::new_v4()).collect();
        let mut draft = draft_with_ids(&ids);

        draft.move_item(5, 0);
        assert_eq!(draft.outfit().item_ids, ids);

        // Oversized destination clamps to the end
        draft.move_item(0, 99);
        assert_eq!(draft.outfit().item_ids, vec![ids[1], ids[0]]);
    }

    #[test]
    fn test_remove_items_indices_against_pre_removal_sequence() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let mut draft = draft_with_ids(&ids);

        // Unsorted, duplicated, partially out-of-range index set
        draft.remove_items(&[3, 0, 3, 9]);
        assert_eq!(draft.outfit().item_ids, vec![ids[1], ids[2], ids[4]]);
    }

    #[test]
    fn test_change_foot_style_evicts_incompatible() {
        let heels_only = item_with_styles(Some(vec![FootStyle::Heels]));
        let unrestricted = item_with_styles(None);
        let catalog = vec![heels_only.clone(), unrestricted.clone()];

        let mut draft = WorkingOutfit::new_draft(None, None);
        draft.set_foot_style(FootStyle::Heels, &catalog);
        draft.toggle_item(heels_only.id);
        draft.toggle_item(unrestricted.id);

        draft.set_foot_style(FootStyle::Flat, &catalog);
        assert_eq!(draft.outfit().foot_style, FootStyle::Flat);
        assert_eq!(draft.outfit().item_ids, vec![unrestricted.id]);
        for id in &draft.outfit().item_ids {
            let item = catalog.iter().find(|i| i.id == *id).unwrap();
            assert!(item.is_compatible(FootStyle::Flat));
        }
    }

    #[test]
    fn test_change_foot_style_same_style_is_noop() {
        let heels_only = item_with_styles(Some(vec![FootStyle::Heels]));
        let catalog = vec![heels_only.clone()];

        let mut draft = WorkingOutfit::new_draft(None, None);
        draft.set_foot_style(FootStyle::Heels, &catalog);
        draft.toggle_item(heels_only.id);

        draft.set_foot_style(FootStyle::Heels, &catalog);
        assert_eq!(draft.outfit().item_ids, vec![heels_only.id]);
    }

    #[test]
    fn test_same_style_set_never_evicts_stale_incompatible_item() {
        // An item's supported styles can be edited after the outfit was
        // saved, leaving an incompatible id in the sequence. A set of the
        // current style must leave that id alone; only a real change runs
        // eviction.
        let heels_only = item_with_styles(Some(vec![FootStyle::Heels]));
        let catalog = vec![heels_only.clone()];

        let mut outfit = Outfit::new("Saved");
        outfit.item_ids = vec![heels_only.id];
        let mut draft = WorkingOutfit::from_saved(outfit);
        assert_eq!(draft.outfit().foot_style, FootStyle::Flat);

        draft.set_foot_style(FootStyle::Flat, &catalog);
        assert_eq!(draft.outfit().item_ids, vec![heels_only.id]);

        draft.set_foot_style(FootStyle::Heels, &catalog);
        assert_eq!(draft.outfit().item_ids, vec![heels_only.id]);

        draft.set_foot_style(FootStyle::Flat, &catalog);
        assert!(draft.outfit().item_ids.is_empty());
    }

    #[test]
    fn test_change_foot_style_retains_dangling_ids() {
        let dangling = Uuid::new_v4();
        let mut draft = WorkingOutfit::new_draft(None, None);
        draft.toggle_item(dangling);

        draft.set_foot_style(FootStyle::Heels, &[]);
        assert_eq!(draft.outfit().item_ids, vec![dangling]);
    }

    #[test]
    fn test_lazy_insert_exactly_once() {
        let mut draft = WorkingOutfit::new_draft(None, None);
        assert!(!draft.needs_insert());

        draft.toggle_item(Uuid::new_v4());
        assert!(draft.needs_insert());

        draft.mark_persisted();
        assert!(!draft.needs_insert());
        assert!(draft.is_persisted());

        // Further mutations never re-trigger the insert
        draft.toggle_item(Uuid::new_v4());
        assert!(!draft.needs_insert());
    }

    #[test]
    fn test_saved_outfit_opens_persisted() {
        let outfit = Outfit::new("Brunch");
        let draft = WorkingOutfit::from_saved(outfit);
        assert!(draft.is_persisted());
        assert!(!draft.needs_insert());
    }

    #[test]
    fn test_apply_save_defaults_blank_title() {
        let mut draft = WorkingOutfit::new_draft(None, None);
        draft.apply_save("  ", vec!["fall".to_string()], None, None);
        assert_eq!(draft.outfit().title, "Outfit");
        assert_eq!(draft.outfit().tags, vec!["fall".to_string()]);

        draft.apply_save("  Date Night  ", Vec::new(), None, None);
        assert_eq!(draft.outfit().title, "Date Night");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("fall, winter , ,denim"),
            vec!["fall".to_string(), "winter".to_string(), "denim".to_string()]
        );
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_hairstyle_catalog_has_default_first() {
        assert_eq!(AVAILABLE_HAIRSTYLES[0], "hair_default");
        assert_eq!(AVAILABLE_HAIRSTYLES.len(), 7);
    }
}
