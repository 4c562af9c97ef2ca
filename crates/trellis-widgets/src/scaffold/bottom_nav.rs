//! Bottom-navigation strategy.
//!
//! One tab per navigation item; the active tab's content is built lazily by
//! the action executor's view builder, under the ambient tab controller so
//! nested content can query and change the active tab. Missing builders,
//! absent identifiers and malformed items all degrade to placeholders.

use std::rc::Rc;

use serde_json::Value;
use smallvec::SmallVec;
use trellis_core::{Callback, Modifier, TabBarItem, TabController, View, ViewKind,
    with_tab_controller};

use super::app_bar::{self, AppBarSpec};
use super::{ScaffoldProps, Slots, collapsible};
use crate::context::RenderContext;
use crate::widget::WidgetInstance;
use crate::{Box, Column, Surface, ViewExt};

pub const TAB_BAR_HEIGHT: f32 = 64.0;

/// One entry of the bottom navigation bar, read from a child's props and
/// its `onSelect` action descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: Option<String>,
    pub label: String,
    pub icon: Option<String>,
    pub args: Value,
}

pub(crate) fn extract_nav_items(
    bottom_nav: &WidgetInstance,
    ctx: &RenderContext,
) -> SmallVec<[NavItem; 4]> {
    bottom_nav
        .children_of("children")
        .iter()
        .map(|c| nav_item(c, ctx))
        .collect()
}

/// Extraction never fails: malformed descriptors are logged and yield an
/// item without an identifier, which renders as an empty tab.
fn nav_item(child: &WidgetInstance, ctx: &RenderContext) -> NavItem {
    let label = ctx.eval_string(child.prop("label")).unwrap_or_default();
    let icon = ctx.eval_string(child.prop("icon"));
    let (id, args) = match child.prop("onSelect") {
        Some(Value::Object(desc)) => {
            let id = desc.get("id").and_then(|v| ctx.eval_string(Some(v)));
            if id.is_none() {
                log::warn!("navigation item `{label}`: onSelect descriptor without an id");
            }
            (id, desc.get("args").cloned().unwrap_or(Value::Null))
        }
        Some(other) => {
            log::warn!("navigation item `{label}`: malformed onSelect descriptor {other}");
            (None, Value::Null)
        }
        None => (None, Value::Null),
    };
    NavItem {
        id,
        label,
        icon,
        args,
    }
}

pub(super) fn render(
    ctx: &RenderContext,
    bn: &WidgetInstance,
    slots: &Slots<'_>,
    props: &ScaffoldProps,
    bar_spec: Option<&AppBarSpec>,
    controller: TabController,
) -> View {
    let items = extract_nav_items(bn, ctx);
    let selected = if items.is_empty() {
        0
    } else {
        controller.current_index().min(items.len() - 1)
    };
    // descendants reading the ambient controller must see the tab that is
    // actually rendered, so an out-of-range index is written back clamped
    if !items.is_empty() && controller.current_index() != selected {
        controller.set_current_index(selected);
    }

    let header = match (slots.app_bar, bar_spec) {
        (Some(ab), Some(spec)) if spec.classifies_collapsible() => {
            Some(collapsible::simplified_header(ctx, ab, spec))
        }
        (Some(ab), Some(spec)) if spec.visible => {
            // drawers have no effect alongside bottom navigation; the menu
            // affordance is inert
            let menu = (slots.drawer.is_some() || slots.end_drawer.is_some())
                .then(|| Rc::new(|| {}) as Callback);
            Some(app_bar::toolbar(
                ab,
                spec,
                ctx,
                spec.collapsed_height,
                menu,
                None,
            ))
        }
        _ => None,
    };

    let content = match items.get(selected) {
        Some(item) => tab_content(ctx, item, &controller),
        None => placeholder(),
    };
    let content_region = super::basic::wrap_body(content, props);

    let bar_items: Vec<TabBarItem> = items
        .iter()
        .map(|i| TabBarItem {
            label: i.label.clone(),
            icon: i.icon.clone(),
        })
        .collect();
    let on_select = {
        let c = controller.clone();
        move |i: usize| c.set_current_index(i)
    };
    let tab_bar = View::new(
        0,
        ViewKind::TabBar {
            items: bar_items,
            selected,
            on_select: Some(Rc::new(on_select)),
        },
    )
    .modifier(Modifier::new().fill_max_width().height(TAB_BAR_HEIGHT));

    let mut root = Modifier::new().fill_max_size();
    if let Some(bg) = props.background {
        root = root.background(bg);
    }
    Surface(
        root,
        Column(Modifier::new().fill_max_size()).child((header, content_region, tab_bar)),
    )
}

fn tab_content(ctx: &RenderContext, item: &NavItem, controller: &TabController) -> View {
    let Some(id) = &item.id else {
        return placeholder();
    };
    with_tab_controller(controller.clone(), || ctx.view_builder(id, &item.args))
        .unwrap_or_else(|| {
            log::debug!("no view builder for `{id}`; rendering placeholder");
            placeholder()
        })
}

fn placeholder() -> View {
    Box(Modifier::new().fill_max_size())
}
