//! The poster wall runtime: an explicit state object for one loaded page.
//!
//! Each mutating operation updates in-memory state and then writes exactly
//! the facet it touched. Nothing is observed implicitly; hosts either call
//! the operation methods directly or route UI events through
//! [`WallRuntime::dispatch`].
//!
//! Edit mode is transient. It is never persisted and never exported, and
//! while it is on, titles are visible regardless of the persisted
//! preference.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::error::{StorageError, WallError};
use crate::model::{Card, CustomData, EmbeddedWall, LayoutField, LayoutSettings, WallConfig, WallSnapshot};
use crate::reconcile::reconcile;
use crate::storage::{Storage, StorageKeys};

/// A UI event routed into the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallAction {
    /// Drag-and-drop report from the sortable layer.
    Reorder { from: usize, to: usize },
    EditTitle { id: String, text: String },
    EditLink { id: String, url: String },
    ToggleEditMode,
    SetShowTitles(bool),
    UpdateLayout { field: LayoutField, value: u32 },
    Activate { id: String },
}

/// Side effect the host must carry out after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the URL in a new browsing context.
    Navigate(String),
}

/// Defaults restored by a settings reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetState {
    pub settings: LayoutSettings,
    pub show_titles: bool,
}

pub struct WallRuntime<S: Storage> {
    embedded: EmbeddedWall,
    keys: StorageKeys,
    storage: S,
    cards: Vec<Card>,
    settings: LayoutSettings,
    show_titles: bool,
    edit_mode: bool,
}

impl<S: Storage> WallRuntime<S> {
    /// Build the runtime for `embedded`, loading whatever facets `storage`
    /// holds. A missing or unreadable facet falls back to its embedded
    /// default without affecting the others.
    pub fn initialize(embedded: EmbeddedWall, storage: S) -> Self {
        let keys = StorageKeys::for_namespace(&embedded.namespace);
        let mut runtime = Self {
            cards: embedded.cards.clone(),
            settings: embedded.config.default_layout(),
            show_titles: embedded.config.show_titles_by_default,
            edit_mode: false,
            embedded,
            keys,
            storage,
        };
        runtime.load();
        runtime
    }

    /// Discard in-memory state and load again from storage.
    pub fn reinitialize(&mut self) {
        self.load();
    }

    fn load(&mut self) {
        let defaults = &self.embedded.config;

        self.settings = load_facet::<S, LayoutSettings>(&self.storage, &self.keys.settings)
            .map(LayoutSettings::clamped)
            .unwrap_or_else(|| defaults.default_layout());
        self.show_titles = load_facet(&self.storage, &self.keys.show_titles)
            .unwrap_or(defaults.show_titles_by_default);

        let order: Option<Vec<String>> = load_facet(&self.storage, &self.keys.order);
        let custom: Option<BTreeMap<String, CustomData>> =
            load_facet(&self.storage, &self.keys.custom_data);
        self.cards = reconcile(&self.embedded.cards, order.as_deref(), custom.as_ref());
        self.edit_mode = false;

        tracing::debug!(
            namespace = %self.embedded.namespace,
            cards = self.cards.len(),
            "Initialized wall runtime"
        );
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn settings(&self) -> LayoutSettings {
        self.settings
    }

    /// The persisted title preference, ignoring edit mode.
    pub fn show_titles(&self) -> bool {
        self.show_titles
    }

    /// Whether titles are rendered right now.
    pub fn titles_visible(&self) -> bool {
        self.show_titles || self.edit_mode
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Drag-reorder is only live in edit mode.
    pub fn drag_enabled(&self) -> bool {
        self.edit_mode
    }

    pub fn config(&self) -> &WallConfig {
        &self.embedded.config
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Route one UI event to its operation.
    pub fn dispatch(&mut self, action: WallAction) -> Result<Effect, WallError> {
        match action {
            WallAction::Reorder { from, to } => {
                if !self.drag_enabled() {
                    tracing::debug!(from, to, "Ignoring reorder outside edit mode");
                    return Ok(Effect::None);
                }
                self.reorder(from, to)?;
            }
            WallAction::EditTitle { id, text } => self.edit_title(&id, &text)?,
            WallAction::EditLink { id, url } => self.edit_link(&id, &url)?,
            WallAction::ToggleEditMode => {
                self.toggle_edit_mode();
            }
            WallAction::SetShowTitles(value) => self.set_show_titles(value)?,
            WallAction::UpdateLayout { field, value } => {
                self.update_layout_setting(field, value)?;
            }
            WallAction::Activate { id } => return self.activate(&id),
        }
        Ok(Effect::None)
    }

    /// Move the card at `from` to `to` and persist the id order.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), WallError> {
        let len = self.cards.len();
        for index in [from, to] {
            if index >= len {
                return Err(WallError::IndexOutOfRange { index, len });
            }
        }

        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        self.persist_order()
    }

    /// Set a card's title to the trimmed text and persist all custom data.
    pub fn edit_title(&mut self, id: &str, text: &str) -> Result<(), WallError> {
        self.card_mut(id)?.title = text.trim().to_string();
        self.persist_custom_data()
    }

    /// Set a card's link verbatim and persist all custom data.
    pub fn edit_link(&mut self, id: &str, url: &str) -> Result<(), WallError> {
        self.card_mut(id)?.link = url.to_string();
        self.persist_custom_data()
    }

    /// Flip edit mode. Returns the new state.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        tracing::debug!(edit_mode = self.edit_mode, "Toggled edit mode");
        self.edit_mode
    }

    pub fn set_show_titles(&mut self, value: bool) -> Result<(), WallError> {
        self.show_titles = value;
        write_facet(&mut self.storage, &self.keys.show_titles, &value)
    }

    /// Set one layout field (clamped) and persist the whole layout.
    /// Returns the stored value.
    pub fn update_layout_setting(&mut self, field: LayoutField, value: u32) -> Result<u32, WallError> {
        let stored = self.settings.set(field, value);
        write_facet(&mut self.storage, &self.keys.settings, &self.settings)?;
        Ok(stored)
    }

    /// The state a settings reset restores. Pure.
    pub fn compute_reset_state(&self) -> ResetState {
        ResetState {
            settings: self.embedded.config.default_layout(),
            show_titles: self.embedded.config.show_titles_by_default,
        }
    }

    /// Apply a computed reset, persisting both restored facets.
    pub fn apply_reset_state(&mut self, state: ResetState) -> Result<(), WallError> {
        self.settings = state.settings;
        write_facet(&mut self.storage, &self.keys.settings, &self.settings)?;
        self.set_show_titles(state.show_titles)
    }

    /// Remove the order, custom data and title visibility facets.
    pub fn clear_extended_persistence(&mut self) -> Result<(), WallError> {
        self.storage.remove_item(&self.keys.order)?;
        self.storage.remove_item(&self.keys.custom_data)?;
        self.storage.remove_item(&self.keys.show_titles)?;
        tracing::debug!("Cleared order, custom data and title visibility");
        Ok(())
    }

    /// Restore default settings and title visibility; when `clear_extended`
    /// is set, also drop the extended facets and reload from scratch.
    pub fn reset_settings(&mut self, clear_extended: bool) -> Result<(), WallError> {
        let state = self.compute_reset_state();
        self.apply_reset_state(state)?;
        if clear_extended {
            self.clear_extended_persistence()?;
            self.reinitialize();
        }
        Ok(())
    }

    /// Follow a card's link unless editing or the card has none.
    pub fn activate(&self, id: &str) -> Result<Effect, WallError> {
        let card = self.card(id).ok_or_else(|| WallError::UnknownCard { id: id.to_string() })?;
        if self.edit_mode || !card.has_link() {
            return Ok(Effect::None);
        }
        Ok(Effect::Navigate(card.link.clone()))
    }

    /// Capture the wall as arranged now. The snapshot's embedded defaults
    /// are the current layout and title preference.
    pub fn export_snapshot(&self) -> WallSnapshot {
        let mut config = self.embedded.config.clone().with_layout(self.settings);
        config.show_titles_by_default = self.show_titles;
        WallSnapshot {
            cards: self.cards.clone(),
            config,
        }
    }

    fn card_mut(&mut self, id: &str) -> Result<&mut Card, WallError> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| WallError::UnknownCard { id: id.to_string() })
    }

    fn persist_order(&mut self) -> Result<(), WallError> {
        let ids: Vec<&str> = self.cards.iter().map(|c| c.id.as_str()).collect();
        write_facet(&mut self.storage, &self.keys.order, &ids)
    }

    fn persist_custom_data(&mut self) -> Result<(), WallError> {
        let data: BTreeMap<&str, CustomData> = self
            .cards
            .iter()
            .map(|c| {
                (
                    c.id.as_str(),
                    CustomData {
                        title: c.title.clone(),
                        link: c.link.clone(),
                    },
                )
            })
            .collect();
        write_facet(&mut self.storage, &self.keys.custom_data, &data)
    }
}

fn load_facet<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read facet, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            tracing::debug!(key, "Loaded persisted facet");
            Some(value)
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Malformed facet, using default");
            None
        }
    }
}

fn write_facet<S: Storage, T: Serialize + ?Sized>(
    storage: &mut S,
    key: &str,
    value: &T,
) -> Result<(), WallError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &json)?;
    tracing::debug!(key, "Persisted facet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            src: id.to_string(),
            title: id.trim_end_matches(".jpg").to_string(),
            link: String::new(),
        }
    }

    fn config(show_titles: bool) -> WallConfig {
        WallConfig {
            wall_title: "MY COLLECTION".to_string(),
            wall_description: "WATCHED MEDIA LOG".to_string(),
            avatar_url: String::new(),
            default_card_width: 180,
            default_gap: 16,
            default_radius: 8,
            show_titles_by_default: show_titles,
        }
    }

    fn embedded(ids: &[&str]) -> EmbeddedWall {
        EmbeddedWall::new(ids.iter().map(|id| card(id)).collect(), config(true))
    }

    fn ids<S: Storage>(runtime: &WallRuntime<S>) -> Vec<&str> {
        runtime.cards().iter().map(|c| c.id.as_str()).collect()
    }

    fn fresh(ids: &[&str]) -> WallRuntime<MemoryStorage> {
        WallRuntime::initialize(embedded(ids), MemoryStorage::new())
    }

    #[test]
    fn test_initialize_without_storage_uses_embedded_defaults() {
        let runtime = fresh(&["a.jpg", "b.jpg"]);
        assert_eq!(ids(&runtime), vec!["a.jpg", "b.jpg"]);
        assert_eq!(runtime.settings(), LayoutSettings::default());
        assert!(runtime.show_titles());
        assert!(!runtime.is_edit_mode());
        assert!(!runtime.drag_enabled());
    }

    #[test]
    fn test_initialize_reconciles_persisted_order() {
        let mut storage = MemoryStorage::new();
        storage.set_item("posterWallOrder", r#"["B","C"]"#).unwrap();
        let runtime = WallRuntime::initialize(embedded(&["A", "B", "C", "D"]), storage);
        assert_eq!(ids(&runtime), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_malformed_facet_falls_back_without_blocking_others() {
        let mut storage = MemoryStorage::new();
        storage.set_item("posterWallSettings", "{not json").unwrap();
        storage.set_item("posterWallShowTitles", "false").unwrap();
        storage.set_item("posterWallOrder", r#"["b.jpg"]"#).unwrap();
        storage.set_item("posterWallCustomData", "42").unwrap();

        let runtime = WallRuntime::initialize(embedded(&["a.jpg", "b.jpg"]), storage);
        assert_eq!(runtime.settings(), LayoutSettings::default());
        assert!(!runtime.show_titles());
        assert_eq!(ids(&runtime), vec!["b.jpg", "a.jpg"]);
        assert_eq!(runtime.cards()[0].title, "b");
    }

    #[test]
    fn test_persisted_layout_is_clamped_on_load() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item("posterWallSettings", r#"{"cardWidth":5000,"gap":900,"radius":77}"#)
            .unwrap();

        let runtime = WallRuntime::initialize(embedded(&["a.jpg"]), storage);
        assert_eq!(
            runtime.settings(),
            LayoutSettings {
                card_width: 400,
                gap: 100,
                radius: 50,
            }
        );

        let snapshot = runtime.export_snapshot();
        assert_eq!(snapshot.config.default_card_width, 400);
        assert_eq!(snapshot.config.default_gap, 100);
        assert_eq!(snapshot.config.default_radius, 50);
    }

    #[test]
    fn test_layout_settings_round_trip() {
        let mut runtime = fresh(&["a.jpg"]);
        runtime.update_layout_setting(LayoutField::CardWidth, 250).unwrap();
        runtime.update_layout_setting(LayoutField::Gap, 4).unwrap();
        runtime.update_layout_setting(LayoutField::Radius, 0).unwrap();
        let before = runtime.settings();

        let reloaded = WallRuntime::initialize(embedded(&["a.jpg"]), runtime.into_storage());
        assert_eq!(reloaded.settings(), before);
    }

    #[test]
    fn test_update_layout_setting_clamps_and_persists_whole_object() {
        let mut runtime = fresh(&["a.jpg"]);
        let stored = runtime.update_layout_setting(LayoutField::Radius, 99).unwrap();
        assert_eq!(stored, 50);
        let raw = runtime.storage().get_item("posterWallSettings").unwrap().unwrap();
        assert_eq!(raw, r#"{"cardWidth":180,"gap":16,"radius":50}"#);
    }

    #[test]
    fn test_reorder_moves_card_and_persists_order() {
        let mut runtime = fresh(&["A", "B", "C"]);
        runtime.reorder(0, 2).unwrap();
        assert_eq!(ids(&runtime), vec!["B", "C", "A"]);
        let raw = runtime.storage().get_item("posterWallOrder").unwrap().unwrap();
        assert_eq!(raw, r#"["B","C","A"]"#);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut runtime = fresh(&["A", "B", "C"]);
        runtime.reorder(2, 0).unwrap();
        let before_ids: Vec<String> = ids(&runtime).iter().map(|s| s.to_string()).collect();
        let before_raw = runtime.storage().get_item("posterWallOrder").unwrap();

        runtime.reorder(1, 1).unwrap();
        assert_eq!(ids(&runtime), before_ids);
        assert_eq!(runtime.storage().get_item("posterWallOrder").unwrap(), before_raw);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut runtime = fresh(&["A", "B"]);
        let err = runtime.reorder(0, 2).unwrap_err();
        assert!(matches!(err, WallError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(ids(&runtime), vec!["A", "B"]);
    }

    #[test]
    fn test_dispatch_reorder_requires_edit_mode() {
        let mut runtime = fresh(&["A", "B"]);
        runtime.dispatch(WallAction::Reorder { from: 0, to: 1 }).unwrap();
        assert_eq!(ids(&runtime), vec!["A", "B"]);
        assert!(runtime.storage().get_item("posterWallOrder").unwrap().is_none());

        runtime.dispatch(WallAction::ToggleEditMode).unwrap();
        runtime.dispatch(WallAction::Reorder { from: 0, to: 1 }).unwrap();
        assert_eq!(ids(&runtime), vec!["B", "A"]);
    }

    #[test]
    fn test_edit_title_trims_and_persists_custom_data() {
        let mut runtime = fresh(&["a.jpg", "b.jpg"]);
        runtime.edit_title("a.jpg", "  New Name  ").unwrap();
        assert_eq!(runtime.card("a.jpg").unwrap().title, "New Name");

        let raw = runtime.storage().get_item("posterWallCustomData").unwrap().unwrap();
        let data: BTreeMap<String, CustomData> = serde_json::from_str(&raw).unwrap();
        assert_eq!(data["a.jpg"].title, "New Name");
        assert_eq!(data["b.jpg"].title, "b");
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_edit_link_is_verbatim() {
        let mut runtime = fresh(&["a.jpg"]);
        runtime.edit_link("a.jpg", " not a url ").unwrap();
        assert_eq!(runtime.card("a.jpg").unwrap().link, " not a url ");
    }

    #[test]
    fn test_edit_unknown_card() {
        let mut runtime = fresh(&["a.jpg"]);
        let err = runtime.edit_title("zzz.jpg", "x").unwrap_err();
        assert!(matches!(err, WallError::UnknownCard { .. }));
    }

    #[test]
    fn test_custom_data_survives_reload() {
        let mut runtime = fresh(&["a.jpg", "b.jpg"]);
        runtime.edit_title("b.jpg", "Blade Runner").unwrap();
        runtime.edit_link("b.jpg", "https://example.com/br").unwrap();

        let reloaded = WallRuntime::initialize(embedded(&["a.jpg", "b.jpg"]), runtime.into_storage());
        let card = reloaded.card("b.jpg").unwrap();
        assert_eq!(card.title, "Blade Runner");
        assert_eq!(card.link, "https://example.com/br");
    }

    #[test]
    fn test_edit_mode_forces_titles_without_persisting() {
        let mut storage = MemoryStorage::new();
        storage.set_item("posterWallShowTitles", "false").unwrap();
        let mut runtime = WallRuntime::initialize(embedded(&["a.jpg"]), storage);
        assert!(!runtime.titles_visible());

        assert!(runtime.toggle_edit_mode());
        assert!(runtime.titles_visible());
        assert!(runtime.drag_enabled());
        assert_eq!(
            runtime.storage().get_item("posterWallShowTitles").unwrap().as_deref(),
            Some("false")
        );

        assert!(!runtime.toggle_edit_mode());
        assert!(!runtime.titles_visible());
    }

    #[test]
    fn test_set_show_titles_persists() {
        let mut runtime = fresh(&["a.jpg"]);
        runtime.dispatch(WallAction::SetShowTitles(false)).unwrap();
        assert!(!runtime.show_titles());
        assert_eq!(
            runtime.storage().get_item("posterWallShowTitles").unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_activate() {
        let mut runtime = fresh(&["a.jpg", "b.jpg"]);
        runtime.edit_link("b.jpg", "https://example.com/watch").unwrap();

        assert_eq!(runtime.activate("a.jpg").unwrap(), Effect::None);
        assert_eq!(
            runtime
                .dispatch(WallAction::Activate { id: "b.jpg".to_string() })
                .unwrap(),
            Effect::Navigate("https://example.com/watch".to_string())
        );

        runtime.toggle_edit_mode();
        assert_eq!(runtime.activate("b.jpg").unwrap(), Effect::None);
    }

    #[test]
    fn test_reset_without_confirmation_keeps_order_and_custom_data() {
        let mut runtime = fresh(&["A", "B"]);
        runtime.update_layout_setting(LayoutField::Gap, 60).unwrap();
        runtime.set_show_titles(false).unwrap();
        runtime.reorder(1, 0).unwrap();
        runtime.edit_title("A", "Alpha").unwrap();

        runtime.reset_settings(false).unwrap();

        assert_eq!(runtime.settings(), LayoutSettings::default());
        assert!(runtime.show_titles());
        assert_eq!(ids(&runtime), vec!["B", "A"]);
        assert!(runtime.storage().get_item("posterWallOrder").unwrap().is_some());
        assert!(runtime.storage().get_item("posterWallCustomData").unwrap().is_some());
    }

    #[test]
    fn test_reset_with_confirmation_clears_and_reinitializes() {
        let mut runtime = fresh(&["A", "B"]);
        runtime.toggle_edit_mode();
        runtime.reorder(1, 0).unwrap();
        runtime.edit_title("A", "Alpha").unwrap();
        runtime.update_layout_setting(LayoutField::CardWidth, 300).unwrap();

        runtime.reset_settings(true).unwrap();

        assert_eq!(ids(&runtime), vec!["A", "B"]);
        assert_eq!(runtime.card("A").unwrap().title, "A");
        assert_eq!(runtime.settings(), LayoutSettings::default());
        assert!(!runtime.is_edit_mode());
        let storage = runtime.storage();
        assert!(storage.get_item("posterWallOrder").unwrap().is_none());
        assert!(storage.get_item("posterWallCustomData").unwrap().is_none());
        assert!(storage.get_item("posterWallShowTitles").unwrap().is_none());
        assert!(storage.get_item("posterWallSettings").unwrap().is_some());
    }

    #[test]
    fn test_compute_reset_state_is_pure() {
        let mut runtime = fresh(&["A"]);
        runtime.update_layout_setting(LayoutField::Gap, 40).unwrap();
        let state = runtime.compute_reset_state();
        assert_eq!(state.settings, LayoutSettings::default());
        assert!(state.show_titles);
        assert_eq!(runtime.settings().gap, 40);
    }

    #[test]
    fn test_export_snapshot_captures_data_state_only() {
        let mut runtime = fresh(&["A", "B"]);
        runtime.toggle_edit_mode();
        runtime.reorder(0, 1).unwrap();
        runtime.edit_title("A", "Alpha").unwrap();
        runtime.update_layout_setting(LayoutField::CardWidth, 320).unwrap();
        runtime.set_show_titles(false).unwrap();

        let snapshot = runtime.export_snapshot();
        let snapshot_ids: Vec<&str> = snapshot.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(snapshot_ids, vec!["B", "A"]);
        assert_eq!(snapshot.cards[1].title, "Alpha");
        assert_eq!(snapshot.config.default_card_width, 320);
        assert!(!snapshot.config.show_titles_by_default);
        assert_eq!(snapshot.config.wall_title, "MY COLLECTION");
    }

    #[test]
    fn test_namespace_selects_keys() {
        let mut wall = embedded(&["A", "B"]);
        wall.namespace = "posterWallSnapshot-0123".to_string();
        let mut storage = MemoryStorage::new();
        storage.set_item("posterWallOrder", r#"["B","A"]"#).unwrap();

        let runtime = WallRuntime::initialize(wall, storage);
        assert_eq!(ids(&runtime), vec!["A", "B"]);
        assert_eq!(runtime.keys().order, "posterWallSnapshot-0123Order");
    }
}
