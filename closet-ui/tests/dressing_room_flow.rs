//! End-to-end dressing room flow against a real database
//!
//! Drives the working-outfit engine the way the handlers do: mutate,
//! then insert on the first non-empty state and update thereafter.

use closet_common::catalog::FootStyle;
use closet_common::db::{init_database, outfits};
use closet_common::seed::seed_default_items_if_empty;
use closet_ui::avatar::avatar_layers;
use closet_ui::dressing_room::WorkingOutfit;
use tempfile::tempdir;

#[tokio::test]
async fn test_draft_commits_lazily_then_updates_in_place() {
    let dir = tempdir().unwrap();
    let pool = init_database(&dir.path().join("test.db")).await.unwrap();
    seed_default_items_if_empty(&pool).await.unwrap();

    let catalog = closet_common::db::items::list_items(&pool).await.unwrap();
    assert!(!catalog.is_empty());

    let mut draft = WorkingOutfit::new_draft(None, None);

    // Empty draft: nothing reaches storage
    assert!(!draft.needs_insert());
    assert!(outfits::list_outfits(&pool).await.unwrap().is_empty());

    // First item triggers the one insert
    draft.toggle_item(catalog[0].id);
    assert!(draft.needs_insert());
    outfits::insert_outfit(&pool, draft.outfit()).await.unwrap();
    draft.mark_persisted();

    let stored = outfits::list_outfits(&pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Outfit");
    assert_eq!(stored[0].item_ids, vec![catalog[0].id]);

    // Later edits update the same row
    draft.toggle_item(catalog[1].id);
    assert!(!draft.needs_insert());
    assert!(outfits::update_outfit(&pool, draft.outfit()).await.unwrap());

    let stored = outfits::list_outfits(&pool).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].item_ids, vec![catalog[0].id, catalog[1].id]);
}

#[tokio::test]
async fn test_foot_style_change_persists_evictions() {
    let dir = tempdir().unwrap();
    let pool = init_database(&dir.path().join("test.db")).await.unwrap();
    seed_default_items_if_empty(&pool).await.unwrap();

    let catalog = closet_common::db::items::list_items(&pool).await.unwrap();
    let heels_only = catalog
        .iter()
        .find(|item| item.supported_foot_styles.as_deref() == Some([FootStyle::Heels].as_slice()))
        .expect("seed catalog includes a heels-only item");
    let unrestricted = catalog
        .iter()
        .find(|item| item.supported_foot_styles.is_none())
        .expect("seed catalog includes an unrestricted item");

    let mut draft = WorkingOutfit::new_draft(None, None);
    draft.set_foot_style(FootStyle::Heels, &catalog);
    draft.toggle_item(heels_only.id);
    draft.toggle_item(unrestricted.id);
    outfits::insert_outfit(&pool, draft.outfit()).await.unwrap();
    draft.mark_persisted();

    // Switching to flat evicts the heels-only item
    draft.set_foot_style(FootStyle::Flat, &catalog);
    assert!(outfits::update_outfit(&pool, draft.outfit()).await.unwrap());

    let stored = outfits::get_outfit(&pool, draft.outfit().id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.foot_style, FootStyle::Flat);
    assert_eq!(stored.item_ids, vec![unrestricted.id]);
}

#[tokio::test]
async fn test_avatar_layers_from_stored_outfit() {
    let dir = tempdir().unwrap();
    let pool = init_database(&dir.path().join("test.db")).await.unwrap();
    seed_default_items_if_empty(&pool).await.unwrap();

    let catalog = closet_common::db::items::list_items(&pool).await.unwrap();
    let with_asset = catalog
        .iter()
        .find(|item| item.image_name.is_some() && item.supported_foot_styles.is_none())
        .expect("seed catalog includes an unrestricted item with an asset");

    let mut draft = WorkingOutfit::new_draft(None, None);
    draft.toggle_item(with_asset.id);
    outfits::insert_outfit(&pool, draft.outfit()).await.unwrap();

    let stored = outfits::get_outfit(&pool, draft.outfit().id)
        .await
        .unwrap()
        .unwrap();
    let layers = avatar_layers(&stored, &catalog);

    let assets: Vec<&str> = layers.iter().map(|l| l.asset.as_str()).collect();
    assert_eq!(assets.first(), Some(&"avatar_base"));
    assert_eq!(assets.get(1), Some(&"avatar_feet_flat"));
    assert_eq!(assets.last(), Some(&"hair_default"));
    assert!(assets.contains(&with_asset.image_name.as_deref().unwrap()));
}
