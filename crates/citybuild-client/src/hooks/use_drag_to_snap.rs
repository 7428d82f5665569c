//! Drag-to-snap hook binding the gesture controller to a sheet element.
//!
//! The controller lives in a `use_mut_ref` so global pointer listeners always
//! see the live session. Listeners are attached only while the sheet is open,
//! following the controller's [`ListenerAction`]s.

use std::cell::RefCell;
use std::rc::Rc;

use citybuild_core::drag::SETTLE_DURATION_MS;
use citybuild_core::{DragController, ListenerAction, PointerDown, SnapChange, SnapConfig};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use yew::prelude::*;

use crate::surface::ElementSurface;

/// Options for [`use_drag_to_snap`].
#[derive(Clone, PartialEq)]
pub struct DragToSnapOptions {
    /// Sheet element written to while dragging.
    pub sheet_ref: NodeRef,
    pub config: SnapConfig,
    /// Owned by the parent; the hook only follows it.
    pub is_open: bool,
    /// Receives the settled snap ratio.
    pub on_snap_change: Callback<f64>,
}

/// Values returned by [`use_drag_to_snap`].
#[derive(Clone, PartialEq)]
pub struct DragSnapControls {
    /// Attach to the drag handle's `onpointerdown`.
    pub on_pointer_down: Callback<PointerEvent>,
    pub is_dragging: bool,
    pub current_snap_index: usize,
    /// Programmatic snap, e.g. from a close button.
    pub set_snap_index: Callback<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SheetView {
    index: usize,
    dragging: bool,
}

struct PointerListeners {
    _move: EventListener,
    _up: EventListener,
    _cancel: EventListener,
}

#[derive(Clone)]
struct SheetDriver {
    controller: Rc<RefCell<DragController>>,
    sheet_ref: NodeRef,
    view: UseStateHandle<SheetView>,
    on_snap_change: Rc<RefCell<Callback<f64>>>,
    settle_timer: Rc<RefCell<Option<Timeout>>>,
}

impl SheetDriver {
    fn surface(&self) -> Option<ElementSurface> {
        ElementSurface::from_node_ref(&self.sheet_ref)
    }

    fn sync(&self) {
        let view = {
            let controller = self.controller.borrow();
            SheetView {
                index: controller.current_snap_index(),
                dragging: controller.is_dragging(),
            }
        };
        self.view.set(view);
    }

    fn notify(&self, change: SnapChange) {
        let callback = self.on_snap_change.borrow().clone();
        callback.emit(change.ratio);
    }

    fn set_config(&self, config: SnapConfig) {
        self.controller.borrow_mut().set_config(config);
        self.sync();
    }

    fn set_open(&self, open: bool) -> ListenerAction {
        let mut surface = self.surface();
        let transition = self.controller.borrow_mut().set_open(open, surface.as_mut());
        self.sync();
        if let Some(change) = transition.change {
            self.notify(change);
        }
        transition.listeners
    }

    fn pointer_down(&self, pointer_y: f64) {
        let mut surface = self.surface();
        let result = self
            .controller
            .borrow_mut()
            .pointer_down(pointer_y, surface.as_mut());
        if result == PointerDown::Started {
            self.sync();
        } else {
            tracing::trace!(?result, "sheet pointer down not started");
        }
    }

    fn pointer_move(&self, pointer_y: f64) {
        let mut surface = self.surface();
        self.controller
            .borrow_mut()
            .pointer_move(pointer_y, surface.as_mut());
    }

    fn pointer_up(&self, pointer_y: f64) {
        let mut surface = self.surface();
        let release = self
            .controller
            .borrow_mut()
            .pointer_up(pointer_y, surface.as_mut());
        let Some(release) = release else {
            return;
        };

        self.sync();
        self.notify(release.change);

        let controller = Rc::clone(&self.controller);
        let sheet_ref = self.sheet_ref.clone();
        let timeout = Timeout::new(SETTLE_DURATION_MS, move || {
            let mut surface = ElementSurface::from_node_ref(&sheet_ref);
            controller
                .borrow_mut()
                .finish_settle(release.settle, surface.as_mut());
        });
        *self.settle_timer.borrow_mut() = Some(timeout);
    }

    fn cancel(&self) {
        let mut surface = self.surface();
        if self.controller.borrow_mut().cancel(surface.as_mut()) {
            self.sync();
        }
    }

    fn set_snap_index(&self, index: usize) {
        let change = self.controller.borrow_mut().set_snap_index(index);
        self.sync();
        self.notify(change);
    }

    fn attach_listeners(&self) -> PointerListeners {
        let document = gloo::utils::document();

        let driver = self.clone();
        let on_move = EventListener::new(&document, "pointermove", move |event| {
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                driver.pointer_move(f64::from(event.client_y()));
            }
        });

        let driver = self.clone();
        let on_up = EventListener::new(&document, "pointerup", move |event| {
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                driver.pointer_up(f64::from(event.client_y()));
            }
        });

        // A cancelled pointer never sends pointerup.
        let driver = self.clone();
        let on_cancel = EventListener::new(&document, "pointercancel", move |_| {
            driver.cancel();
        });

        tracing::debug!("sheet pointer listeners attached");
        PointerListeners {
            _move: on_move,
            _up: on_up,
            _cancel: on_cancel,
        }
    }
}

/// Hook driving a snap-point bottom sheet from pointer input.
#[hook]
pub fn use_drag_to_snap(options: DragToSnapOptions) -> DragSnapControls {
    let DragToSnapOptions {
        sheet_ref,
        config,
        is_open,
        on_snap_change,
    } = options;

    let controller = {
        let config = config.clone();
        use_mut_ref(move || DragController::new(config))
    };
    let view = {
        let initial = config.initial_snap();
        use_state_eq(move || SheetView {
            index: initial,
            dragging: false,
        })
    };
    let callback_ref = use_mut_ref(|| on_snap_change.clone());
    *callback_ref.borrow_mut() = on_snap_change;
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let listeners = use_mut_ref(|| None::<PointerListeners>);

    let driver = SheetDriver {
        controller,
        sheet_ref,
        view: view.clone(),
        on_snap_change: callback_ref,
        settle_timer: settle_timer.clone(),
    };

    {
        let driver = driver.clone();
        use_effect_with(config, move |config| {
            driver.set_config(config.clone());
        });
    }

    {
        let driver = driver.clone();
        let listeners = listeners.clone();
        use_effect_with(is_open, move |open| match driver.set_open(*open) {
            ListenerAction::Attach => {
                *listeners.borrow_mut() = Some(driver.attach_listeners());
            }
            ListenerAction::Detach => {
                listeners.borrow_mut().take();
                tracing::debug!("sheet pointer listeners detached");
            }
            ListenerAction::Keep => {}
        });
    }

    // Unmount: drop listeners and any pending settle timer.
    use_effect_with((), move |_| {
        move || {
            listeners.borrow_mut().take();
            settle_timer.borrow_mut().take();
        }
    });

    let on_pointer_down = {
        let driver = driver.clone();
        Callback::from(move |event: PointerEvent| {
            driver.pointer_down(f64::from(event.client_y()));
        })
    };

    let set_snap_index = Callback::from(move |index: usize| driver.set_snap_index(index));

    DragSnapControls {
        on_pointer_down,
        is_dragging: view.dragging,
        current_snap_index: view.index,
        set_snap_index,
    }
}
