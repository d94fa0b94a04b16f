//! Application state and transitions.
//!
//! AppState is the root state type. It owns the dataset, the view-range
//! controller and every filter. The shell calls transition methods and then
//! asks for derived data (projections, ticks, list rows) to draw.

use crate::model::{Dataset, Era, Event, EventId, ScaleError};
use crate::state::{EraFilter, EventListState, SearchState};
use crate::view_state::{
    build_rows, card_height, project, ticks, ListRow, ProjectedEvent, TimeScale, ViewRange,
    ViewRangeController, DEFAULT_BREAKPOINT_YEAR, DEFAULT_MIN_ZOOM_SPAN,
    DEFAULT_OVERSCAN_PERCENT, DEFAULT_PAN_FRACTION, DEFAULT_SEGMENT1_RATIO,
    DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR, MARKER_ROW_HEIGHT,
};
use std::collections::HashSet;
use tracing::{debug, warn};

// ===== NavigatorSettings =====

/// Tunables for the overview navigator, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorSettings {
    /// Year where the full-view axis changes slope.
    pub breakpoint_year: i64,
    /// Share of the full-view axis before the breakpoint.
    pub segment1_ratio: f64,
    /// Narrowest span, in years, the view can zoom to.
    pub min_zoom_span: i64,
    /// Span multiplier for one zoom-in step.
    pub zoom_in_factor: f64,
    /// Span multiplier for one zoom-out step.
    pub zoom_out_factor: f64,
    /// Fraction of the span moved by one pan step.
    pub pan_fraction: f64,
    /// Axis percent kept on each side for markers just off the axis.
    pub overscan_percent: f64,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            breakpoint_year: DEFAULT_BREAKPOINT_YEAR,
            segment1_ratio: DEFAULT_SEGMENT1_RATIO,
            min_zoom_span: DEFAULT_MIN_ZOOM_SPAN,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            pan_fraction: DEFAULT_PAN_FRACTION,
            overscan_percent: DEFAULT_OVERSCAN_PERCENT,
        }
    }
}

// ===== AppState =====

/// Application state.
///
/// # Invariants
///
/// - The list rows show exactly the events in `active_ids`, in year order.
/// - `active_ids` holds the events passing both the era filter and the
///   search query.
/// - `selected`, when set, names an event of the dataset.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Dataset,
    scale: TimeScale,
    navigator: ViewRangeController,
    settings: NavigatorSettings,

    search: SearchState,
    era_filter: EraFilter,
    active_ids: HashSet<EventId>,

    selected: Option<EventId>,
    hovered: Option<EventId>,
    list: EventListState,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
    /// First help line shown.
    pub help_scroll_offset: usize,
}

impl AppState {
    /// Create state showing the full dataset with no filters.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaleError`] when the settings do not fit the dataset
    /// bounds (breakpoint outside, ratio outside `(0, 1)`, minimum zoom span
    /// not positive or wider than the dataset).
    pub fn new(dataset: Dataset, settings: NavigatorSettings) -> Result<Self, ScaleError> {
        let bounds = dataset.bounds();
        let scale = TimeScale::new(bounds, settings.breakpoint_year, settings.segment1_ratio)?;
        let navigator = ViewRangeController::new(bounds, settings.min_zoom_span)?;

        let mut state = Self {
            dataset,
            scale,
            navigator,
            settings,
            search: SearchState::Inactive,
            era_filter: EraFilter::all(),
            active_ids: HashSet::new(),
            selected: None,
            hovered: None,
            list: EventListState::default(),
            help_visible: false,
            help_scroll_offset: 0,
        };
        state.refresh_list();
        Ok(state)
    }

    // ----- accessors -----

    /// The loaded events.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Coordinate mapper for the dataset.
    pub fn scale(&self) -> &TimeScale {
        &self.scale
    }

    /// View-range controller.
    pub fn navigator(&self) -> &ViewRangeController {
        &self.navigator
    }

    /// Navigator tunables.
    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    /// Current view range of the overview.
    pub fn view_range(&self) -> ViewRange {
        self.navigator.range()
    }

    /// Search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Enabled eras.
    pub fn era_filter(&self) -> &EraFilter {
        &self.era_filter
    }

    /// Event list rows and scroll position.
    pub fn list(&self) -> &EventListState {
        &self.list
    }

    /// Ids of the events passing the era filter and the search query.
    pub fn active_ids(&self) -> &HashSet<EventId> {
        &self.active_ids
    }

    /// Events shown in the list, in year order.
    pub fn filtered_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.dataset
            .events()
            .iter()
            .filter(|event| self.active_ids.contains(&event.id))
    }

    /// Selected event id.
    pub fn selected(&self) -> Option<EventId> {
        self.selected
    }

    /// Selected event.
    pub fn selected_event(&self) -> Option<&Event> {
        self.selected.and_then(|id| self.dataset.get(id))
    }

    /// Event under the mouse in the overview.
    pub fn hovered_event(&self) -> Option<&Event> {
        self.hovered.and_then(|id| self.dataset.get(id))
    }

    /// First event card at or below the first visible list line.
    pub fn top_event(&self) -> Option<&Event> {
        let top_row = self.list.top_row()?;
        self.list
            .rows()
            .get(top_row..)?
            .iter()
            .find_map(|row| match row {
                ListRow::Event(id) => Some(*id),
                ListRow::Marker(_) => None,
            })
            .and_then(|id| self.dataset.get(id))
    }

    // ----- derived data -----

    /// Overview markers for the current view.
    ///
    /// # Errors
    ///
    /// Propagates [`ScaleError`] from the scale; the controller keeps the
    /// range valid so this does not happen in practice.
    pub fn projections(&self) -> Result<Vec<ProjectedEvent>, ScaleError> {
        project(
            self.dataset.events(),
            self.navigator.range(),
            &self.scale,
            &self.active_ids,
            self.settings.overscan_percent,
        )
    }

    /// Tick years for the current view.
    pub fn ticks(&self) -> Vec<i64> {
        ticks(self.navigator.range())
    }

    /// Axis position of `year` in the current view.
    pub fn position_of(&self, year: i64) -> Result<f64, ScaleError> {
        self.scale.position(year, self.navigator.range())
    }

    // ----- navigator -----

    /// Narrow the view by the zoom-in factor.
    pub fn zoom_in(&mut self) {
        self.navigator.zoom(self.settings.zoom_in_factor);
    }

    /// Widen the view by the zoom-out factor.
    pub fn zoom_out(&mut self) {
        self.navigator.zoom(self.settings.zoom_out_factor);
    }

    /// Move the view toward earlier years.
    pub fn pan_left(&mut self) {
        self.navigator.pan(-self.settings.pan_fraction);
    }

    /// Move the view toward later years.
    pub fn pan_right(&mut self) {
        self.navigator.pan(self.settings.pan_fraction);
    }

    /// Show the whole dataset.
    pub fn reset_view(&mut self) {
        self.navigator.reset();
    }

    /// Center the view on the selected event, keeping the span.
    pub fn center_on_selection(&mut self) {
        if let Some(year) = self.selected_event().map(|event| event.year) {
            self.navigator.center_on(year);
        }
    }

    /// Focus the view on the year span of the selected event's era.
    pub fn zoom_to_selected_era(&mut self) {
        let Some(era) = self.selected_event().map(|event| event.era) else {
            debug!("No selection to zoom to");
            return;
        };
        if let Some(span) = self
            .dataset
            .era_spans()
            .into_iter()
            .find(|span| span.era == era)
        {
            self.navigator.focus_span(span.start, span.end);
        }
    }

    // ----- filters -----

    /// Replace the search state and re-filter the list.
    pub fn set_search(&mut self, search: SearchState) {
        let changed = search.effective_query() != self.search.effective_query();
        self.search = search;
        if changed {
            self.refresh_list();
        }
    }

    /// Flip one era in the filter.
    pub fn toggle_era(&mut self, era: Era) {
        self.era_filter.toggle(era);
        debug!(era = era.label(), enabled = self.era_filter.is_enabled(era), "Toggled era");
        self.refresh_list();
    }

    /// Enable every era.
    pub fn show_all_eras(&mut self) {
        self.era_filter.show_all();
        self.refresh_list();
    }

    /// Replace the era filter wholesale.
    pub fn set_era_filter(&mut self, filter: EraFilter) {
        self.era_filter = filter;
        self.refresh_list();
    }

    // ----- selection -----

    /// Select the next event in the filtered list, wrapping to the first.
    pub fn select_next(&mut self) {
        let ids: Vec<EventId> = self.list.event_ids().collect();
        let next = match self.selected.and_then(|id| ids.iter().position(|x| *x == id)) {
            Some(pos) => ids.get((pos + 1) % ids.len()),
            None => ids.first(),
        };
        if let Some(id) = next.copied() {
            self.selected = Some(id);
            self.focus_selection();
        }
    }

    /// Select the previous event in the filtered list, wrapping to the last.
    pub fn select_prev(&mut self) {
        let ids: Vec<EventId> = self.list.event_ids().collect();
        let prev = match self.selected.and_then(|id| ids.iter().position(|x| *x == id)) {
            Some(pos) => ids.get((pos + ids.len() - 1) % ids.len()),
            None => ids.last(),
        };
        if let Some(id) = prev.copied() {
            self.selected = Some(id);
            self.focus_selection();
        }
    }

    /// Select an event by id, clearing any filter that hides it.
    pub fn select_event(&mut self, id: EventId) {
        let Some(event) = self.dataset.get(id) else {
            warn!(%id, "Ignoring selection of unknown event");
            return;
        };
        let era = event.era;
        let hidden_by_search = self
            .search
            .effective_query()
            .is_some_and(|query| !query.matches(event));

        if hidden_by_search {
            self.search = SearchState::Inactive;
        }
        if !self.era_filter.is_enabled(era) {
            self.era_filter.enable(era);
        }
        if hidden_by_search || !self.active_ids.contains(&id) {
            self.refresh_list();
        }

        self.selected = Some(id);
        self.focus_selection();
    }

    /// Record the event under the mouse, if any.
    pub fn set_hovered(&mut self, id: Option<EventId>) {
        self.hovered = id;
    }

    // ----- list -----

    /// Apply the list viewport size. Rows are re-measured when the width
    /// changes, keeping the top row in place.
    pub fn set_viewport(&mut self, content_width: u16, height: usize) {
        if content_width != self.list.content_width() {
            debug!(content_width, height, "List viewport resized");
            let top_row = self.list.top_row();
            self.list.set_content_width(content_width);
            self.rebuild_list_rows();
            if let Some(row) = top_row {
                self.list.scroll_to_row(row);
            }
        }
        self.list.set_viewport_height(height);
    }

    /// Scroll the list up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.list.scroll_up(lines);
    }

    /// Scroll the list down by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        self.list.scroll_down(lines);
    }

    /// Scroll the list up one page.
    pub fn page_up(&mut self) {
        self.list.page_up();
    }

    /// Scroll the list down one page.
    pub fn page_down(&mut self) {
        self.list.page_down();
    }

    /// Jump to the start of the list.
    pub fn scroll_to_top(&mut self) {
        self.list.scroll_to_top();
    }

    /// Jump to the end of the list.
    pub fn scroll_to_bottom(&mut self) {
        self.list.scroll_to_bottom();
    }

    /// Scroll the list so `id`'s card is at the top.
    pub fn scroll_to_event(&mut self, id: EventId) {
        if let Some(row) = self.list.row_of(id) {
            self.list.scroll_to_row(row);
        }
    }

    // ----- internals -----

    /// Recenter a zoomed view on the selection and bring its card to the top.
    fn focus_selection(&mut self) {
        let Some(event) = self.selected_event() else {
            return;
        };
        let (id, year) = (event.id, event.year);
        if !self.navigator.is_full_view() {
            self.navigator.center_on(year);
        }
        self.scroll_to_event(id);
    }

    /// Recompute the active set and the list rows after a filter change.
    ///
    /// The selected card stays at the top when it survives the filter;
    /// otherwise the list returns to the top.
    fn refresh_list(&mut self) {
        let query = self.search.effective_query();
        self.active_ids = self
            .dataset
            .events()
            .iter()
            .filter(|event| self.era_filter.is_enabled(event.era))
            .filter(|event| query.as_ref().map_or(true, |q| q.matches(event)))
            .map(|event| event.id)
            .collect();
        debug!(
            active = self.active_ids.len(),
            total = self.dataset.len(),
            "Filtered event list"
        );

        self.rebuild_list_rows();
        match self.selected.filter(|id| self.active_ids.contains(id)) {
            Some(id) => self.scroll_to_event(id),
            None => self.list.scroll_to_top(),
        }
    }

    fn rebuild_list_rows(&mut self) {
        let rows = build_rows(self.filtered_events(), self.dataset.bounds());
        let width = self.list.content_width();
        let heights: Vec<usize> = rows
            .iter()
            .map(|row| match row {
                ListRow::Marker(_) => MARKER_ROW_HEIGHT,
                ListRow::Event(id) => self
                    .dataset
                    .get(*id)
                    .map_or(0, |event| card_height(event, width)),
            })
            .collect();
        self.list.rebuild(rows, heights);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
