// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Instant;

use floorplan_filter::{FavoriteSet, FilterEngine, FilterState, FilterStats, sorted_categories};
use floorplan_regions::{LoadError, LoadReport, LoadedRecords, RegionStore, Stand, StandRecord};
use floorplan_selection::{
    Armed, Capture, Corner, Focus, FocusChange, IncompleteCapture, PendingCapture,
};
use floorplan_style::{StyleDescriptor, StyleFlags, StyleResolver};
use floorplan_view::{CoordinateSystem, MapViewport, Padding, ViewFit};
use kurbo::{Point, Rect};
use tracing::{debug, info, warn};

use crate::config::{CaptureSource, EngineConfig};
use crate::debounce::QueryDebouncer;
use crate::error::{ConfigError, EngineError};
use crate::events::EngineEvent;
use crate::summary::StandSummary;

/// What a map click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click stamped these capture corners; nothing was selected.
    Captured(Vec<Corner>),
    /// The click landed on a visible stand, which is now focused.
    Selected(String),
    /// The click hit no visible stand.
    Background,
}

/// What [`Engine::begin_capture`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CaptureStart {
    /// The corner waits for the next map click.
    Armed(Armed),
    /// The corner was stamped at the view center (pixel space).
    Stamped(Point),
}

/// One interactive floor-plan session.
///
/// Owns the store, the filter, focus, admin capture, and the viewport. All
/// operations run to completion; observable side effects are queued as
/// [`EngineEvent`]s and collected with [`drain_events`](Self::drain_events).
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    coords: CoordinateSystem,
    viewport: MapViewport,
    style: StyleResolver,
    image_url: Option<String>,
    loaded: bool,
    store: RegionStore,
    search: FilterEngine,
    filter: FilterState,
    favorites: FavoriteSet,
    // Store positions passing the filter, ascending.
    visible: Vec<usize>,
    debouncer: QueryDebouncer,
    focus: Focus<String>,
    deep_link: Option<String>,
    admin: bool,
    capture: Capture,
    last_click: Option<Point>,
    events: Vec<EngineEvent>,
}

impl Engine {
    /// Creates an inert engine: empty store, vacuous filter, nothing focused.
    ///
    /// The configuration is validated first; see [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let [width, height] = config.view.viewport;
        let mut viewport = MapViewport::new(Rect::new(0.0, 0.0, width, height));
        viewport.set_zoom_limits(config.view.min_zoom, config.view.max_zoom);
        viewport.set_fit_mode(config.view.fit_mode);
        Ok(Self {
            coords: CoordinateSystem::new(config.image.image_space()),
            viewport,
            style: config.style.resolver(),
            image_url: None,
            loaded: false,
            store: RegionStore::new(),
            search: FilterEngine::default(),
            filter: FilterState::new(),
            favorites: FavoriteSet::new(),
            visible: Vec::new(),
            debouncer: QueryDebouncer::new(config.filter.debounce()),
            focus: Focus::new(),
            deep_link: None,
            admin: false,
            capture: Capture::new(),
            last_click: None,
            events: Vec::new(),
            config,
        })
    }

    /// Returns this engine seeded with a persisted favorite set.
    #[must_use]
    pub fn with_favorites(mut self, favorites: FavoriteSet) -> Self {
        self.favorites = favorites;
        self
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- Loading ---

    /// Applies the outcome of fetching a record set.
    ///
    /// On success the store is replaced in one step, visibility is
    /// recomputed, the view is fitted to the plan, and a pending deep link
    /// is selected. On failure the engine falls back to an empty store and
    /// queues [`EngineEvent::LoadFailed`].
    pub fn apply_load(
        &mut self,
        fetched: Result<&str, LoadError>,
    ) -> Result<LoadReport, LoadError> {
        match fetched.and_then(RegionStore::from_json_str) {
            Ok(loaded) => Ok(self.install(loaded)),
            Err(err) => {
                self.fail_load(&err);
                Err(err)
            }
        }
    }

    /// Parses and applies a record set document.
    pub fn load_json(&mut self, text: &str) -> Result<LoadReport, LoadError> {
        self.apply_load(Ok(text))
    }

    /// Returns `true` once a record set has been applied successfully.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn install(&mut self, loaded: LoadedRecords) -> LoadReport {
        let LoadedRecords {
            store,
            report,
            image,
        } = loaded;

        let image_space = image
            .as_ref()
            .map(|spec| spec.image_space())
            .filter(|space| !space.is_empty())
            .unwrap_or_else(|| self.config.image.image_space());
        self.coords = CoordinateSystem::new(image_space);
        self.image_url = image.map(|spec| spec.url).filter(|url| !url.is_empty());

        self.search = FilterEngine::new(&store);
        self.store = store;
        self.loaded = true;
        if self
            .focus
            .current()
            .is_some_and(|id| !self.store.contains(id))
        {
            self.clear_focus();
        }

        info!(
            accepted = self.store.len(),
            rejected = report.rejected_count(),
            "loaded stand records"
        );
        self.events.push(EngineEvent::Loaded {
            accepted: self.store.len(),
            rejected: report.rejected_count(),
        });
        self.refresh_visibility();
        self.fit_plan();

        if let Some(id) = self.deep_link.take() {
            self.select(&id);
        }
        report
    }

    fn fail_load(&mut self, err: &LoadError) {
        warn!(error = %err, "failed to load stand records");
        self.coords = CoordinateSystem::new(self.config.image.image_space());
        self.image_url = None;
        self.store = RegionStore::new();
        self.search = FilterEngine::default();
        self.loaded = false;
        self.clear_focus();
        self.events.push(EngineEvent::LoadFailed {
            message: err.to_string(),
        });
        self.refresh_visibility();
    }

    /// Requests that `id` be selected once the store is loaded.
    ///
    /// Applied immediately when a record set is already loaded.
    pub fn set_deep_link(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.loaded {
            self.select(&id);
        } else {
            self.deep_link = Some(id);
        }
    }

    /// The store.
    #[must_use]
    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    /// Pixel/view mapping for the current image.
    #[must_use]
    pub fn coords(&self) -> &CoordinateSystem {
        &self.coords
    }

    /// Background image URL from the record set, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Categories sorted for display.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        sorted_categories(&self.store)
    }

    /// Serializes the store back to its record shape.
    #[must_use]
    pub fn export_records(&self) -> Vec<StandRecord> {
        self.store.to_records()
    }

    /// Serializes the store as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.store.to_json_pretty()
    }

    // --- Filtering ---

    /// The current filter.
    #[must_use]
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Records a query edit made at `now`.
    ///
    /// The query is applied once no further edit arrives for the configured
    /// window; returns `true` if it was applied right away.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) -> bool {
        self.debouncer.push(text, now);
        self.poll(now)
    }

    /// Applies a pending query whose quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                self.apply_query(text);
                true
            }
            None => false,
        }
    }

    /// Applies a pending query immediately.
    pub fn flush_query(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(text) => {
                self.apply_query(text);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while a query edit is waiting for its quiet period.
    #[must_use]
    pub fn has_pending_query(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn apply_query(&mut self, text: String) {
        self.filter.query = text;
        self.refresh_visibility();
    }

    /// Changes the category filter, clearing a `fav:` query.
    ///
    /// A pending query edit is applied first.
    pub fn set_category(&mut self, category: &str) {
        if let Some(text) = self.debouncer.flush() {
            self.filter.query = text;
        }
        self.filter.switch_category(category);
        self.refresh_visibility();
    }

    /// Replaces the whole filter, discarding any pending query edit.
    pub fn set_filter(&mut self, state: FilterState) {
        self.debouncer.cancel();
        self.filter = state;
        self.refresh_visibility();
    }

    /// Shows favorites across all categories.
    pub fn show_favorites(&mut self) {
        self.set_filter(FilterState::favorites_only());
    }

    /// Shows one category with no query.
    pub fn show_category(&mut self, category: &str) {
        self.set_filter(FilterState::category_only(category));
    }

    fn refresh_visibility(&mut self) {
        self.visible = self
            .search
            .visible_indices(&self.store, &self.favorites, &self.filter);
        self.events.push(EngineEvent::VisibilityChanged {
            stats: self.stats(),
        });
    }

    /// Stands passing the filter, in store order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Stand> {
        let all = self.store.all();
        self.visible.iter().map(|&idx| &all[idx]).collect()
    }

    /// Returns `true` if the stand passes the current filter.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.store
            .index_of(id)
            .is_some_and(|idx| self.visible.binary_search(&idx).is_ok())
    }

    /// Counts for the stats panel.
    #[must_use]
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            shown: self.visible.len(),
            total: self.store.len(),
            favorites: self.favorites.len(),
        }
    }

    // --- Favorites ---

    /// The favorite set.
    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Replaces the favorite set.
    pub fn set_favorites(&mut self, favorites: FavoriteSet) {
        self.favorites = favorites;
        self.refresh_visibility();
    }

    /// Toggles a stand's favorite status.
    ///
    /// Returns the new status, or `None` if the stand does not exist.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        if !self.store.contains(id) {
            debug!(id, "favorite toggle ignored: unknown stand");
            return None;
        }
        let favorite = self.favorites.toggle(id);
        self.events.push(EngineEvent::FavoriteToggled {
            id: id.to_owned(),
            favorite,
        });
        self.refresh_visibility();
        Some(favorite)
    }

    // --- Focus ---

    /// Focuses the stand `id` and frames it in the viewport.
    ///
    /// Unknown ids leave the focus unchanged and queue
    /// [`EngineEvent::SelectMissed`].
    pub fn select(&mut self, id: &str) -> FocusChange<String> {
        let store = &self.store;
        let change = self
            .focus
            .select_with(id.to_owned(), |key| store.contains(key));
        match change {
            FocusChange::Focused { .. } => self.announce_focus(id),
            FocusChange::Missed(_) => {
                debug!(id, "selection ignored: unknown stand");
                self.events
                    .push(EngineEvent::SelectMissed { id: id.to_owned() });
            }
        }
        change
    }

    fn announce_focus(&mut self, id: &str) {
        let Some(stand) = self.store.get(id) else {
            return;
        };
        debug!(id, "focused stand");
        let view_rect = self.coords.to_view_rect(stand.bounds);
        let fit = self.viewport.fit_rect(view_rect, self.config.view.padding);
        let summary = StandSummary::new(stand, self.favorites.contains(id), &self.config.links);
        self.events.push(EngineEvent::Focused { summary, fit });
    }

    /// Clears the focus, returning the id that had it.
    pub fn clear_focus(&mut self) -> Option<String> {
        let id = self.focus.clear()?;
        debug!(id = id.as_str(), "focus cleared");
        self.events
            .push(EngineEvent::FocusCleared { id: id.clone() });
        Some(id)
    }

    /// The focus state.
    #[must_use]
    pub fn focus(&self) -> &Focus<String> {
        &self.focus
    }

    /// The focused stand.
    #[must_use]
    pub fn focused(&self) -> Option<&Stand> {
        self.focus.current().and_then(|id| self.store.get(id))
    }

    /// Display card for a stand.
    #[must_use]
    pub fn summary(&self, id: &str) -> Option<StandSummary> {
        let stand = self.store.get(id)?;
        Some(StandSummary::new(
            stand,
            self.favorites.contains(id),
            &self.config.links,
        ))
    }

    // --- Clicks ---

    /// Handles a map click at a view-space point.
    pub fn click(&mut self, view_point: Point) -> ClickOutcome {
        let pixel = self.coords.view_to_pixel_point(view_point);
        self.click_pixel(pixel)
    }

    /// Handles a map click at a device-space point.
    pub fn click_device(&mut self, device_point: Point) -> ClickOutcome {
        let view_point = self.viewport.device_to_view_point(device_point);
        self.click(view_point)
    }

    /// Handles a map click at a pixel-space point.
    ///
    /// A pending capture arm takes the click. Otherwise admin mode records
    /// it, and the topmost visible stand under it is selected.
    pub fn click_pixel(&mut self, pixel: Point) -> ClickOutcome {
        if let Some(event) = self.capture.on_map_click(pixel) {
            let corners: Vec<Corner> = event.corners().collect();
            for &corner in &corners {
                debug!(?corner, x = pixel.x, y = pixel.y, "captured corner");
                self.events.push(EngineEvent::CornerCaptured {
                    corner,
                    point: pixel,
                });
            }
            return ClickOutcome::Captured(corners);
        }
        if self.admin {
            self.last_click = Some(pixel);
        }

        let all = self.store.all();
        let hit = self
            .visible
            .iter()
            .rev()
            .map(|&idx| &all[idx])
            .find(|stand| stand.contains(pixel))
            .map(|stand| stand.id.clone());
        match hit {
            Some(id) => {
                self.select(&id);
                ClickOutcome::Selected(id)
            }
            None => ClickOutcome::Background,
        }
    }

    // --- Admin ---

    /// Turns admin mode on or off.
    ///
    /// Turning it off drops pending arms and the last recorded click.
    /// Captured corners are kept.
    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
        if !admin {
            self.capture.cancel_all();
            self.last_click = None;
        }
    }

    /// Returns `true` in admin mode.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Last map click recorded in admin mode, in pixel space.
    #[must_use]
    pub fn last_click(&self) -> Option<Point> {
        self.last_click
    }

    /// Starts capturing `corner`.
    ///
    /// With [`CaptureSource::MapClick`] the corner is armed for the next
    /// click, replacing that corner's pending arm. With [`CaptureSource::ViewCenter`]
    /// it is stamped at the current view center right away.
    pub fn begin_capture(&mut self, corner: Corner) -> Result<CaptureStart, EngineError> {
        if !self.admin {
            return Err(EngineError::AdminDisabled);
        }
        match self.config.capture.source {
            CaptureSource::MapClick => {
                let armed = self.capture.arm(corner);
                debug!(?corner, token = armed.token.get(), "capture armed");
                self.events.push(EngineEvent::CaptureArmed {
                    corner,
                    token: armed.token,
                    replaced: armed.replaced,
                });
                Ok(CaptureStart::Armed(armed))
            }
            CaptureSource::ViewCenter => {
                let point = self.coords.view_to_pixel_point(self.viewport.view_center());
                self.capture.set_corner(corner, point);
                debug!(?corner, x = point.x, y = point.y, "captured corner at view center");
                self.events
                    .push(EngineEvent::CornerCaptured { corner, point });
                Ok(CaptureStart::Stamped(point))
            }
        }
    }

    /// Starts capturing corner 1.
    pub fn begin_capture_corner1(&mut self) -> Result<CaptureStart, EngineError> {
        self.begin_capture(Corner::First)
    }

    /// Starts capturing corner 2.
    pub fn begin_capture_corner2(&mut self) -> Result<CaptureStart, EngineError> {
        self.begin_capture(Corner::Second)
    }

    /// Disarms `corner` without stamping anything.
    pub fn cancel_capture(&mut self, corner: Corner) -> Option<PendingCapture> {
        self.capture.cancel(corner)
    }

    /// Forgets both captured corners.
    pub fn clear_capture(&mut self) {
        self.capture.clear();
    }

    /// The capture state.
    #[must_use]
    pub fn capture(&self) -> &Capture {
        &self.capture
    }

    /// Normalized pixel bounds spanned by the captured corners.
    pub fn capture_bounds(&self) -> Result<Rect, IncompleteCapture> {
        self.capture.bounds()
    }

    /// A new stand record spanning the captured corners.
    ///
    /// Bounds are rounded to one decimal; `id` doubles as the token.
    pub fn capture_snippet(&self, id: &str) -> Result<StandRecord, IncompleteCapture> {
        let r = self.capture.bounds()?;
        Ok(StandRecord {
            id: id.to_owned(),
            name: "New stand".to_owned(),
            category: "General".to_owned(),
            token: id.to_owned(),
            bounds: [r.x0, r.y0, r.x1, r.y1].map(round_tenth),
            description: String::new(),
            note: String::new(),
        })
    }

    // --- View ---

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Mutable access for host-driven pan and zoom.
    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Resizes the device viewport, keeping the view center.
    pub fn set_viewport(&mut self, device_rect: Rect) {
        self.viewport.set_device_rect(device_rect);
    }

    /// Fits the whole plan into the viewport.
    pub fn fit_plan(&mut self) -> Option<ViewFit> {
        let fit = self
            .viewport
            .fit_rect(self.coords.image_view_rect(), Padding::Units(0.0))?;
        self.events.push(EngineEvent::ViewFitted { fit });
        Some(fit)
    }

    // --- Styling ---

    /// Style of every stand, in store order.
    #[must_use]
    pub fn styles(&self) -> Vec<(&str, StyleDescriptor)> {
        let mut shown = vec![false; self.store.len()];
        for &idx in &self.visible {
            shown[idx] = true;
        }
        self.store
            .iter()
            .zip(shown)
            .map(|(stand, visible)| (stand.id.as_str(), self.resolve(stand, visible)))
            .collect()
    }

    /// Style of one stand.
    #[must_use]
    pub fn style_of(&self, id: &str) -> Option<StyleDescriptor> {
        let stand = self.store.get(id)?;
        Some(self.resolve(stand, self.is_visible(id)))
    }

    fn resolve(&self, stand: &Stand, visible: bool) -> StyleDescriptor {
        let flags = StyleFlags::from_state(
            visible,
            self.favorites.contains(&stand.id),
            self.focus.is_focused(&stand.id),
        );
        self.style.resolve_for(flags, &stand.category)
    }

    // --- Events ---

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        core::mem::take(&mut self.events)
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
