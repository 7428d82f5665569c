//! Drag-to-snap gesture controller for the bottom sheet.
//!
//! The controller owns one sheet's gesture lifecycle:
//! - pointer down starts a [`DragSession`] and freezes transitions
//! - pointer move writes a live `translateY` preview to the surface
//! - pointer up resolves the next snap index and hands the sheet back to the
//!   declarative height with a short settle animation
//!
//! The DOM is reached only through [`SheetSurface`], so the state machine runs
//! the same in unit tests and in the browser.

use crate::snap::{SnapConfig, parse_translate_y};

/// Minimum vertical travel (px) before a release changes the snap index.
pub const SNAP_THRESHOLD_PX: f64 = 50.0;

/// Duration of the settle animation after a release.
pub const SETTLE_DURATION_MS: u32 = 300;

/// Transition applied while settling.
pub const SETTLE_TRANSITION: &str = "transform 0.3s ease-out, height 0.3s ease-out";

/// Transition applied while the pointer drives the sheet.
const DRAG_TRANSITION: &str = "none";

/// Visual handle on the sheet element.
pub trait SheetSurface {
    /// Current inline transform, if any.
    fn current_transform(&self) -> Option<String>;
    /// Writes a vertical translation in pixels.
    fn set_translate_y(&mut self, offset_px: f64);
    /// Removes the inline translation so the declarative position applies.
    fn clear_translate(&mut self);
    /// Overrides the element transition. `None` removes the override.
    fn set_transition(&mut self, transition: Option<&str>);
    /// Enables or disables text selection on the element.
    fn set_user_select(&mut self, enabled: bool);
}

/// State of one active pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_start_y: f64,
    pub sheet_start_offset_px: f64,
    pub current_offset_px: f64,
}

/// Which writer owns the sheet transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetMode {
    /// Height and position come from the declarative render.
    #[default]
    Settled,
    /// The controller writes the transform directly.
    Dragging(DragSession),
}

/// Resolved snap state to report to the owning screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapChange {
    pub index: usize,
    pub ratio: f64,
}

/// Identifies one scheduled settle; stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket(u64);

/// Outcome of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub change: SnapChange,
    /// Pass back to [`DragController::finish_settle`] after [`SETTLE_DURATION_MS`].
    pub settle: SettleTicket,
}

/// Result of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    Started,
    /// The sheet is closed.
    Closed,
    /// The sheet element is not mounted.
    NoSurface,
    /// A session is already active; the first one is kept.
    AlreadyDragging,
}

/// What the host must do with the global pointermove/pointerup listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    Attach,
    Detach,
    Keep,
}

/// Result of an open/close transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenTransition {
    pub listeners: ListenerAction,
    /// Set when opening reset the index to the initial snap.
    pub change: Option<SnapChange>,
}

/// Gesture state machine of a single bottom sheet.
#[derive(Debug, Clone)]
pub struct DragController {
    config: SnapConfig,
    current_index: usize,
    mode: SheetMode,
    is_open: bool,
    listening: bool,
    settle_generation: u64,
}

impl DragController {
    /// Creates a closed controller resting on the configured initial snap.
    pub fn new(config: SnapConfig) -> Self {
        Self {
            current_index: config.initial_snap(),
            config,
            mode: SheetMode::Settled,
            is_open: false,
            listening: false,
            settle_generation: 0,
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn current_snap_index(&self) -> usize {
        self.current_index
    }

    pub fn current_ratio(&self) -> f64 {
        self.config.ratio_at(self.current_index)
    }

    pub fn mode(&self) -> SheetMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, SheetMode::Dragging(_))
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the global pointer listeners should currently be attached.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Replaces the snap configuration, keeping the index inside the new bounds.
    pub fn set_config(&mut self, config: SnapConfig) {
        self.config = config;
        self.current_index = self.config.clamp_index(self.current_index);
    }

    /// Opens or closes the sheet.
    ///
    /// Opening resets the index to the initial snap. Closing cancels any active
    /// drag so a hidden sheet is never driven by a dangling session.
    pub fn set_open<S: SheetSurface>(
        &mut self,
        open: bool,
        surface: Option<&mut S>,
    ) -> OpenTransition {
        if open == self.is_open {
            return OpenTransition {
                listeners: ListenerAction::Keep,
                change: None,
            };
        }
        self.is_open = open;

        if open {
            self.current_index = self.config.initial_snap();
            let listeners = if self.listening {
                ListenerAction::Keep
            } else {
                self.listening = true;
                ListenerAction::Attach
            };
            return OpenTransition {
                listeners,
                change: Some(self.snap_change()),
            };
        }

        self.cancel(surface);
        let listeners = if self.listening {
            self.listening = false;
            ListenerAction::Detach
        } else {
            ListenerAction::Keep
        };
        OpenTransition {
            listeners,
            change: None,
        }
    }

    /// Starts a drag at `pointer_y`.
    pub fn pointer_down<S: SheetSurface>(
        &mut self,
        pointer_y: f64,
        surface: Option<&mut S>,
    ) -> PointerDown {
        if !self.is_open {
            return PointerDown::Closed;
        }
        let Some(surface) = surface else {
            return PointerDown::NoSurface;
        };
        if self.is_dragging() {
            tracing::debug!("pointer down ignored: drag already in progress");
            return PointerDown::AlreadyDragging;
        }

        let start_offset = surface
            .current_transform()
            .map_or(0.0, |transform| parse_translate_y(&transform));

        self.mode = SheetMode::Dragging(DragSession {
            pointer_start_y: pointer_y,
            sheet_start_offset_px: start_offset,
            current_offset_px: start_offset,
        });

        surface.set_transition(Some(DRAG_TRANSITION));
        surface.set_user_select(false);
        PointerDown::Started
    }

    /// Updates the live preview. Returns the offset written, if dragging.
    pub fn pointer_move<S: SheetSurface>(
        &mut self,
        pointer_y: f64,
        surface: Option<&mut S>,
    ) -> Option<f64> {
        let SheetMode::Dragging(session) = &mut self.mode else {
            return None;
        };

        let delta_y = pointer_y - session.pointer_start_y;
        // Pulling above the fully open position is blocked, not elastic.
        let offset = (session.sheet_start_offset_px + delta_y).max(0.0);
        session.current_offset_px = offset;

        if let Some(surface) = surface {
            surface.set_translate_y(offset);
        }
        Some(offset)
    }

    /// Ends the drag and resolves the next snap index.
    ///
    /// Without an active session this is a no-op returning `None`. If the
    /// element went away mid-drag the session is dropped and the index kept.
    pub fn pointer_up<S: SheetSurface>(
        &mut self,
        pointer_y: f64,
        surface: Option<&mut S>,
    ) -> Option<Release> {
        let SheetMode::Dragging(session) = self.mode else {
            return None;
        };
        let Some(surface) = surface else {
            self.cancel::<S>(None);
            return None;
        };
        self.mode = SheetMode::Settled;

        let drag_distance = pointer_y - session.pointer_start_y;
        self.current_index = self.resolve_index(drag_distance);
        self.settle_generation += 1;

        surface.set_user_select(true);
        surface.set_transition(Some(SETTLE_TRANSITION));
        surface.set_translate_y(0.0);

        tracing::debug!(
            drag_distance,
            index = self.current_index,
            "sheet released"
        );

        Some(Release {
            change: self.snap_change(),
            settle: SettleTicket(self.settle_generation),
        })
    }

    /// Clears the settle overrides once the animation has run.
    ///
    /// Returns false when the ticket is stale or a new drag has started.
    pub fn finish_settle<S: SheetSurface>(
        &mut self,
        ticket: SettleTicket,
        surface: Option<&mut S>,
    ) -> bool {
        if ticket.0 != self.settle_generation || self.is_dragging() {
            return false;
        }
        if let Some(surface) = surface {
            surface.set_transition(None);
            surface.clear_translate();
        }
        true
    }

    /// Programmatically moves to `index`, clamped to the valid range.
    pub fn set_snap_index(&mut self, index: usize) -> SnapChange {
        self.current_index = self.config.clamp_index(index);
        self.snap_change()
    }

    /// Drops the active session, if any, and hands the element back to the
    /// declarative render. Returns true when a session was cancelled.
    pub fn cancel<S: SheetSurface>(&mut self, surface: Option<&mut S>) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.mode = SheetMode::Settled;
        self.settle_generation += 1;

        if let Some(surface) = surface {
            surface.set_user_select(true);
            surface.set_transition(None);
            surface.clear_translate();
        }
        tracing::debug!("sheet drag cancelled");
        true
    }

    fn resolve_index(&self, drag_distance: f64) -> usize {
        if drag_distance > SNAP_THRESHOLD_PX {
            self.current_index.saturating_sub(1)
        } else if drag_distance < -SNAP_THRESHOLD_PX {
            self.config.clamp_index(self.current_index + 1)
        } else {
            self.current_index
        }
    }

    fn snap_change(&self) -> SnapChange {
        SnapChange {
            index: self.current_index,
            ratio: self.current_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeSurface {
        transform: Option<String>,
        transition: Option<String>,
        user_select: bool,
    }

    impl FakeSurface {
        fn new() -> Self {
            Self {
                user_select: true,
                ..Self::default()
            }
        }
    }

    impl SheetSurface for FakeSurface {
        fn current_transform(&self) -> Option<String> {
            self.transform.clone()
        }

        fn set_translate_y(&mut self, offset_px: f64) {
            self.transform = Some(format!("translateY({offset_px}px)"));
        }

        fn clear_translate(&mut self) {
            self.transform = None;
        }

        fn set_transition(&mut self, transition: Option<&str>) {
            self.transition = transition.map(str::to_string);
        }

        fn set_user_select(&mut self, enabled: bool) {
            self.user_select = enabled;
        }
    }

    fn open_controller(initial: usize) -> (DragController, FakeSurface) {
        let config = SnapConfig::new(vec![0.04, 0.35, 1.0], initial).unwrap();
        let mut controller = DragController::new(config);
        let mut surface = FakeSurface::new();
        controller.set_open(true, Some(&mut surface));
        (controller, surface)
    }

    fn drag(
        controller: &mut DragController,
        surface: &mut FakeSurface,
        from: f64,
        to: f64,
    ) -> Option<Release> {
        controller.pointer_down(from, Some(&mut *surface));
        controller.pointer_move(to, Some(&mut *surface));
        controller.pointer_up(to, Some(surface))
    }

    #[test]
    fn test_drag_up_moves_to_full() {
        let (mut controller, mut surface) = open_controller(1);

        assert_eq!(controller.pointer_down(500.0, Some(&mut surface)), PointerDown::Started);
        assert!(controller.is_dragging());
        assert_eq!(surface.transition.as_deref(), Some("none"));
        assert!(!surface.user_select);

        // Upward travel is clamped at the fully open position.
        assert_eq!(controller.pointer_move(300.0, Some(&mut surface)), Some(0.0));

        let release = controller.pointer_up(300.0, Some(&mut surface)).unwrap();
        assert_eq!(release.change.index, 2);
        assert!((release.change.ratio - 1.0).abs() < f64::EPSILON);
        assert!(!controller.is_dragging());
        assert!(surface.user_select);
        assert_eq!(surface.transition.as_deref(), Some(SETTLE_TRANSITION));
        assert_eq!(surface.transform.as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn test_small_drag_snaps_back() {
        let (mut controller, mut surface) = open_controller(1);
        let release = drag(&mut controller, &mut surface, 500.0, 530.0).unwrap();
        assert_eq!(release.change.index, 1);
        assert!((release.change.ratio - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (mut controller, mut surface) = open_controller(1);
        assert_eq!(drag(&mut controller, &mut surface, 500.0, 550.0).unwrap().change.index, 1);
        assert_eq!(drag(&mut controller, &mut surface, 500.0, 450.0).unwrap().change.index, 1);
        assert_eq!(drag(&mut controller, &mut surface, 500.0, 550.5).unwrap().change.index, 0);
    }

    #[test]
    fn test_drag_down_clamps_at_minimum() {
        let (mut controller, mut surface) = open_controller(0);
        let release = drag(&mut controller, &mut surface, 200.0, 300.0).unwrap();
        assert_eq!(release.change.index, 0);
    }

    #[test]
    fn test_drag_up_clamps_at_maximum() {
        let (mut controller, mut surface) = open_controller(2);
        let release = drag(&mut controller, &mut surface, 500.0, 100.0).unwrap();
        assert_eq!(release.change.index, 2);
    }

    #[test]
    fn test_each_release_moves_one_step() {
        let (mut controller, mut surface) = open_controller(2);
        // A long downward drag only moves one snap, not to the nearest point.
        assert_eq!(drag(&mut controller, &mut surface, 0.0, 900.0).unwrap().change.index, 1);
        assert_eq!(drag(&mut controller, &mut surface, 0.0, 900.0).unwrap().change.index, 0);
    }

    #[test]
    fn test_move_preview_starts_from_existing_offset() {
        let (mut controller, mut surface) = open_controller(1);
        surface.transform = Some("translateY(40px)".to_string());

        controller.pointer_down(100.0, Some(&mut surface));
        assert_eq!(controller.pointer_move(130.0, Some(&mut surface)), Some(70.0));
        assert_eq!(surface.transform.as_deref(), Some("translateY(70px)"));
        assert_eq!(controller.pointer_move(0.0, Some(&mut surface)), Some(0.0));

        let SheetMode::Dragging(session) = controller.mode() else {
            panic!("expected an active drag");
        };
        assert!((session.sheet_start_offset_px - 40.0).abs() < f64::EPSILON);
        // Live preview never changes the settled index.
        assert_eq!(controller.current_snap_index(), 1);
    }

    #[test]
    fn test_pointer_up_without_session_is_noop() {
        let (mut controller, mut surface) = open_controller(1);
        assert!(controller.pointer_up(0.0, Some(&mut surface)).is_none());
        assert_eq!(controller.current_snap_index(), 1);
        assert!(surface.transition.is_none());

        drag(&mut controller, &mut surface, 500.0, 300.0);
        assert!(controller.pointer_up(900.0, Some(&mut surface)).is_none());
        assert_eq!(controller.current_snap_index(), 2);
    }

    #[test]
    fn test_release_after_unmount_keeps_index() {
        let (mut controller, mut surface) = open_controller(1);
        controller.pointer_down(500.0, Some(&mut surface));
        controller.pointer_move(300.0, Some(&mut surface));

        assert_eq!(controller.pointer_up(300.0, None::<&mut FakeSurface>), None);
        assert!(!controller.is_dragging());
        assert_eq!(controller.current_snap_index(), 1);

        // The next gesture starts cleanly once the element is back.
        assert_eq!(controller.pointer_down(500.0, Some(&mut surface)), PointerDown::Started);
    }

    #[test]
    fn test_move_without_session_is_ignored() {
        let (mut controller, mut surface) = open_controller(1);
        assert!(controller.pointer_move(10.0, Some(&mut surface)).is_none());
        assert!(surface.transform.is_none());
    }

    #[test]
    fn test_pointer_down_preconditions() {
        let config = SnapConfig::default();
        let mut controller = DragController::new(config);
        let mut surface = FakeSurface::new();

        assert_eq!(controller.pointer_down(10.0, Some(&mut surface)), PointerDown::Closed);
        assert!(!controller.is_dragging());

        controller.set_open(true, Some(&mut surface));
        assert_eq!(
            controller.pointer_down(10.0, None::<&mut FakeSurface>),
            PointerDown::NoSurface
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_reentrant_pointer_down_keeps_first_session() {
        let (mut controller, mut surface) = open_controller(1);
        controller.pointer_down(500.0, Some(&mut surface));
        assert_eq!(
            controller.pointer_down(100.0, Some(&mut surface)),
            PointerDown::AlreadyDragging
        );

        // Distance is measured from the first pointer-down.
        let release = controller.pointer_up(420.0, Some(&mut surface)).unwrap();
        assert_eq!(release.change.index, 2);
    }

    #[test]
    fn test_set_snap_index_reports_ratio() {
        let (mut controller, _surface) = open_controller(2);
        let change = controller.set_snap_index(0);
        assert_eq!(controller.current_snap_index(), 0);
        assert_eq!(change, SnapChange { index: 0, ratio: 0.04 });

        for index in 0..3 {
            let change = controller.set_snap_index(index);
            assert_eq!(controller.current_snap_index(), index);
            assert!((change.ratio - controller.config().snap_points()[index]).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_collapse_to_peek_keeps_sheet_usable() {
        let (mut controller, mut surface) = open_controller(1);

        let change = controller.set_snap_index(0);
        assert_eq!(change.index, 0);
        assert!((change.ratio - 0.04).abs() < 1e-9);
        assert!(controller.is_open());
        assert!(controller.is_listening());

        // Dragging up from the peek brings the sheet back.
        let release = drag(&mut controller, &mut surface, 700.0, 600.0).unwrap();
        assert_eq!(release.change.index, 1);
    }

    #[test]
    fn test_set_snap_index_clamps() {
        let (mut controller, _surface) = open_controller(0);
        let change = controller.set_snap_index(10);
        assert_eq!(change.index, 2);
        assert_eq!(controller.current_snap_index(), 2);
    }

    #[test]
    fn test_open_resets_to_initial_snap() {
        let (mut controller, mut surface) = open_controller(1);
        controller.set_snap_index(2);

        controller.set_open(false, Some(&mut surface));
        assert_eq!(controller.current_snap_index(), 2);

        let transition = controller.set_open(true, Some(&mut surface));
        assert_eq!(transition.change, Some(SnapChange { index: 1, ratio: 0.35 }));
        assert_eq!(controller.current_snap_index(), 1);
    }

    #[test]
    fn test_listener_lifecycle_never_leaks() {
        let config = SnapConfig::default();
        let mut controller = DragController::new(config);
        let mut surface = FakeSurface::new();

        for _ in 0..5 {
            let opened = controller.set_open(true, Some(&mut surface));
            assert_eq!(opened.listeners, ListenerAction::Attach);
            assert!(controller.is_listening());

            let again = controller.set_open(true, Some(&mut surface));
            assert_eq!(again.listeners, ListenerAction::Keep);
            assert!(again.change.is_none());

            let closed = controller.set_open(false, Some(&mut surface));
            assert_eq!(closed.listeners, ListenerAction::Detach);
            assert!(!controller.is_listening());
        }

        let closed_again = controller.set_open(false, Some(&mut surface));
        assert_eq!(closed_again.listeners, ListenerAction::Keep);
    }

    #[test]
    fn test_close_during_drag_cancels_session() {
        let (mut controller, mut surface) = open_controller(1);
        controller.pointer_down(500.0, Some(&mut surface));
        controller.pointer_move(600.0, Some(&mut surface));

        controller.set_open(false, Some(&mut surface));
        assert!(!controller.is_dragging());
        assert!(surface.user_select);
        assert!(surface.transition.is_none());
        assert!(surface.transform.is_none());

        // The late pointer-up of the cancelled gesture changes nothing.
        assert!(controller.pointer_up(700.0, Some(&mut surface)).is_none());
        assert_eq!(controller.current_snap_index(), 1);
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let (mut controller, mut surface) = open_controller(1);
        let first = drag(&mut controller, &mut surface, 500.0, 300.0).unwrap();

        // A new drag starts before the first settle timer fires.
        controller.pointer_down(300.0, Some(&mut surface));
        assert!(!controller.finish_settle(first.settle, Some(&mut surface)));
        assert_eq!(surface.transition.as_deref(), Some("none"));

        let second = controller.pointer_up(310.0, Some(&mut surface)).unwrap();
        assert!(!controller.finish_settle(first.settle, Some(&mut surface)));
        assert!(controller.finish_settle(second.settle, Some(&mut surface)));
        assert!(surface.transition.is_none());
        assert!(surface.transform.is_none());
    }

    #[test]
    fn test_release_feeds_shared_ratio() {
        use crate::ratio::SheetRatio;

        let (mut controller, mut surface) = open_controller(1);
        let mut shared = SheetRatio::new(controller.current_ratio());
        assert!((shared.map_zoom_ratio() - 0.65).abs() < 1e-9);

        let release = drag(&mut controller, &mut surface, 500.0, 300.0).unwrap();
        shared = SheetRatio::new(release.change.ratio);
        assert!((shared.current_snap_ratio() - 1.0).abs() < f64::EPSILON);
        assert!(shared.map_zoom_ratio().abs() < f64::EPSILON);

        let change = controller.set_snap_index(0);
        shared = SheetRatio::new(change.ratio);
        assert!((shared.current_snap_ratio() - 0.04).abs() < f64::EPSILON);
        assert!((shared.map_zoom_ratio() - 0.96).abs() < 1e-9);
    }

    #[test]
    fn test_set_config_clamps_index() {
        let (mut controller, _surface) = open_controller(2);
        controller.set_config(SnapConfig::new(vec![0.1, 0.5], 0).unwrap());
        assert_eq!(controller.current_snap_index(), 1);
        assert!((controller.current_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
