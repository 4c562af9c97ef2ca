//! Scaffold: the layout state machine.
//!
//! On every render pass the scaffold resolves its named slots, evaluates its
//! scalar props, classifies the app-bar slot, and then selects exactly one
//! of three render strategies, in priority order:
//!
//! 1. bottom navigation — whenever a `bottomNavigationBar` slot is present;
//! 2. collapsible app bar — no bottom nav, app bar classified collapsible;
//! 3. basic — the fallback.
//!
//! The selection is re-run on every pass, never cached. Each strategy owns
//! exactly the transient state it needs (drawer flags; scroll offset plus
//! measured header height; tab index); the state survives re-renders while
//! the same strategy stays selected and is replaced when the selection
//! changes.

pub mod app_bar;
mod basic;
mod bottom_nav;
mod collapsible;

pub use app_bar::{APP_BAR_KIND, AppBarSpec, DEFAULT_COLLAPSED_HEIGHT, toolbar};
pub use bottom_nav::{NavItem, TAB_BAR_HEIGHT};
pub use collapsible::{COLLAPSED_FADE_RANGE, Collapse, EXPANDED_FADE_RANGE};

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use trellis_core::{Color, Signal, TabController, View, signal};

use crate::context::RenderContext;
use crate::node::WidgetData;
use crate::registry::{WidgetRegistry, build_child_groups};
use crate::widget::{Render, WidgetInstance};

pub fn build_scaffold(
    data: &WidgetData,
    parent: Weak<WidgetInstance>,
    registry: &WidgetRegistry,
) -> Rc<WidgetInstance> {
    let data = data.clone();
    let registry = registry.clone();
    Rc::new_cyclic(move |me| {
        let children = build_child_groups(&data.children, me, &registry);
        WidgetInstance::assemble(&data, parent, children, Box::new(ScaffoldRender::new()))
    })
}

/// Named slots resolved fresh at the start of each render pass. Absence of
/// any slot is a valid configuration, never an error.
pub(crate) struct Slots<'a> {
    pub app_bar: Option<&'a Rc<WidgetInstance>>,
    pub body: Option<&'a Rc<WidgetInstance>>,
    pub drawer: Option<&'a Rc<WidgetInstance>>,
    pub end_drawer: Option<&'a Rc<WidgetInstance>>,
    pub bottom_nav: Option<&'a Rc<WidgetInstance>>,
    pub footer_buttons: &'a [Rc<WidgetInstance>],
}

impl<'a> Slots<'a> {
    pub fn resolve(w: &'a WidgetInstance) -> Self {
        Self {
            app_bar: w.child_of("appBar"),
            body: w.child_of("body"),
            drawer: w.child_of("drawer"),
            end_drawer: w.child_of("endDrawer"),
            bottom_nav: w.child_of("bottomNavigationBar"),
            footer_buttons: w.children_of("persistentFooterButtons"),
        }
    }
}

/// Scalar scaffold props, defaults applied at the call site.
pub(crate) struct ScaffoldProps {
    pub background: Option<Color>,
    pub enable_safe_area: bool,
    pub resize_to_avoid_bottom_inset: bool,
}

impl ScaffoldProps {
    pub fn eval(w: &WidgetInstance, ctx: &RenderContext) -> Self {
        Self {
            background: w
                .prop("backgroundColor")
                .and_then(|v| ctx.eval_color_expr(v)),
            enable_safe_area: ctx.eval_bool(w.prop("enableSafeArea")).unwrap_or(true),
            resize_to_avoid_bottom_inset: ctx
                .eval_bool(w.prop("resizeToAvoidBottomInset"))
                .unwrap_or(true),
        }
    }
}

#[derive(Clone)]
pub(crate) struct BasicState {
    pub drawer_open: Signal<bool>,
    pub end_drawer_open: Signal<bool>,
}

#[derive(Clone)]
pub(crate) struct CollapseState {
    pub scroll_offset: Signal<f32>,
    /// Natural height of the expanded header, reported once by the host on
    /// first layout.
    pub measured_expanded: Rc<Cell<Option<f32>>>,
}

enum ScaffoldState {
    Basic(BasicState),
    Collapsible(CollapseState),
    BottomNav(TabController),
}

/// Per-mounted-instance renderer. Transient state is exclusively owned here;
/// sibling scaffolds never share it and a remount starts fresh.
pub(crate) struct ScaffoldRender {
    state: RefCell<Option<ScaffoldState>>,
}

impl ScaffoldRender {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(None),
        }
    }

    fn basic_state(&self) -> BasicState {
        let mut slot = self.state.borrow_mut();
        if let Some(ScaffoldState::Basic(s)) = slot.as_ref() {
            return s.clone();
        }
        let s = BasicState {
            drawer_open: signal(false),
            end_drawer_open: signal(false),
        };
        *slot = Some(ScaffoldState::Basic(s.clone()));
        s
    }

    fn collapse_state(&self) -> CollapseState {
        let mut slot = self.state.borrow_mut();
        if let Some(ScaffoldState::Collapsible(s)) = slot.as_ref() {
            return s.clone();
        }
        let s = CollapseState {
            scroll_offset: signal(0.0),
            measured_expanded: Rc::new(Cell::new(None)),
        };
        *slot = Some(ScaffoldState::Collapsible(s.clone()));
        s
    }

    fn tab_state(&self) -> TabController {
        let mut slot = self.state.borrow_mut();
        if let Some(ScaffoldState::BottomNav(c)) = slot.as_ref() {
            return c.clone();
        }
        let c = TabController::new(0);
        *slot = Some(ScaffoldState::BottomNav(c.clone()));
        c
    }
}

impl Render for ScaffoldRender {
    fn render(&self, widget: &WidgetInstance, ctx: &RenderContext) -> View {
        // Fixed sequence: slot resolution, scalar props, classification,
        // selection. Classification depends on the resolved app-bar slot.
        let slots = Slots::resolve(widget);
        let props = ScaffoldProps::eval(widget, ctx);
        let bar_spec = slots.app_bar.map(|ab| AppBarSpec::resolve(ab, ctx));

        if let Some(bn) = slots.bottom_nav {
            // bottom navigation outranks the collapsible classification
            bottom_nav::render(
                ctx,
                bn,
                &slots,
                &props,
                bar_spec.as_ref(),
                self.tab_state(),
            )
        } else if let (Some(ab), Some(spec)) = (slots.app_bar, bar_spec.as_ref())
            && spec.classifies_collapsible()
        {
            collapsible::render(ctx, ab, &slots, &props, spec, self.collapse_state())
        } else {
            basic::render(ctx, &slots, &props, bar_spec.as_ref(), self.basic_state())
        }
    }
}
