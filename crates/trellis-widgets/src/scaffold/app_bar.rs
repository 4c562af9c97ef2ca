//! App bar widget and the property set the scaffold extracts from it.

use std::rc::{Rc, Weak};

use trellis_core::{Callback, Color, Modifier, View};

use crate::context::RenderContext;
use crate::node::WidgetData;
use crate::registry::{WidgetRegistry, build_child_groups};
use crate::widget::{Render, WidgetInstance};
use crate::{Box, Image, Row, Spacer, Text, ViewExt};

pub const APP_BAR_KIND: &str = "appBar";

/// Toolbar height when the bar is not expanded.
pub const DEFAULT_COLLAPSED_HEIGHT: f32 = 56.0;

/// Declarative app-bar properties, evaluated fresh each render pass.
#[derive(Clone, Debug)]
pub struct AppBarSpec {
    pub visible: bool,
    pub pinned: bool,
    pub collapsible: bool,
    pub expanded_height: Option<f32>,
    pub collapsed_height: f32,
    pub background: Option<Color>,
    pub title: Option<String>,
}

impl Default for AppBarSpec {
    fn default() -> Self {
        Self {
            visible: true,
            pinned: false,
            collapsible: false,
            expanded_height: None,
            collapsed_height: DEFAULT_COLLAPSED_HEIGHT,
            background: None,
            title: None,
        }
    }
}

impl AppBarSpec {
    /// Extracts the app-bar property set from the slot widget. A widget of
    /// any other kind degrades to the empty (default) property set; it is
    /// still rendered, just never classified collapsible.
    pub fn resolve(widget: &WidgetInstance, ctx: &RenderContext) -> Self {
        if widget.kind() != APP_BAR_KIND {
            log::debug!(
                "app bar slot holds `{}`; using empty property set",
                widget.kind()
            );
            return Self::default();
        }

        let expanded_height = ctx
            .eval_f32(widget.prop("expandedHeight"))
            .filter(|h| *h > 0.0);

        Self {
            visible: ctx.eval_bool(widget.prop("visible")).unwrap_or(true),
            pinned: ctx.eval_truthy(widget.prop("pinned")),
            collapsible: ctx.eval_truthy(widget.prop("enableCollapsibleAppBar")),
            expanded_height,
            collapsed_height: ctx
                .eval_f32(widget.prop("collapsedHeight"))
                .filter(|h| *h > 0.0)
                .unwrap_or(DEFAULT_COLLAPSED_HEIGHT),
            background: widget
                .prop("backgroundColor")
                .and_then(|v| ctx.eval_color_expr(v)),
            title: ctx.eval_string(widget.prop("title")),
        }
    }

    /// Collapsible classification: declared collapsible and carrying a
    /// truthy expanded height.
    pub fn classifies_collapsible(&self) -> bool {
        self.collapsible && self.expanded_height.is_some()
    }
}

/// Fixed toolbar row: leading slot (or menu button when a drawer toggle is
/// supplied), title, then the `actions` group, optionally truncated.
pub fn toolbar(
    app_bar: &WidgetInstance,
    spec: &AppBarSpec,
    ctx: &RenderContext,
    height: f32,
    on_menu_press: Option<Callback>,
    max_actions: Option<usize>,
) -> View {
    let leading = match app_bar.child_of("leading") {
        Some(l) => Some(l.render(ctx)),
        None => on_menu_press.map(|cb| {
            Box(Modifier::new()
                .size(48.0, height)
                .clickable()
                .on_press(move || cb()))
            .child(Image(Modifier::new().size(24.0, 24.0), "menu"))
        }),
    };

    let title = match app_bar.child_of("title") {
        Some(t) => Some(t.render(ctx)),
        None => spec.title.clone().map(Text),
    };

    let shown = max_actions.unwrap_or(usize::MAX);
    let actions: Vec<View> = app_bar
        .children_of("actions")
        .iter()
        .take(shown)
        .map(|a| a.render(ctx))
        .collect();

    let mut bar = Modifier::new().fill_max_width().height(height).padding(8.0);
    if let Some(bg) = spec.background {
        bar = bar.background(bg);
    }

    Row(bar).child((leading, title, Spacer(), actions))
}

pub fn build_app_bar(
    data: &WidgetData,
    parent: Weak<WidgetInstance>,
    registry: &WidgetRegistry,
) -> Rc<WidgetInstance> {
    let data = data.clone();
    let registry = registry.clone();
    Rc::new_cyclic(move |me| {
        let children = build_child_groups(&data.children, me, &registry);
        WidgetInstance::assemble(&data, parent, children, Box::new(AppBarRender))
    })
}

struct AppBarRender;

impl Render for AppBarRender {
    fn render(&self, widget: &WidgetInstance, ctx: &RenderContext) -> View {
        let spec = AppBarSpec::resolve(widget, ctx);
        toolbar(widget, &spec, ctx, spec.collapsed_height, None, None)
    }
}
