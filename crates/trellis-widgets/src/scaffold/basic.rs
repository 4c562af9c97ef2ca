//! Basic strategy: plain column layout with optional drawers and footer.

use std::rc::Rc;

use trellis_core::{Callback, DrawerSide, Modifier, Signal, View, ViewKind};

use super::app_bar::{self, AppBarSpec};
use super::{BasicState, ScaffoldProps, Slots};
use crate::context::RenderContext;
use crate::widget::WidgetInstance;
use crate::{Box, Column, InsetAware, Row, SafeArea, Stack, Surface, ViewExt};

pub(super) fn render(
    ctx: &RenderContext,
    slots: &Slots<'_>,
    props: &ScaffoldProps,
    bar_spec: Option<&AppBarSpec>,
    state: BasicState,
) -> View {
    let app_bar = match (slots.app_bar, bar_spec) {
        (Some(ab), Some(spec)) if spec.visible => {
            // the menu affordance toggles the start drawer, or the end
            // drawer when it is the only drawer declared
            let menu = (slots.drawer.is_some() || slots.end_drawer.is_some()).then(|| {
                let open = if slots.drawer.is_some() {
                    state.drawer_open.clone()
                } else {
                    state.end_drawer_open.clone()
                };
                Rc::new(move || open.update(|o| *o = !*o)) as Callback
            });
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

    let mut root = Modifier::new().fill_max_size();
    if let Some(bg) = props.background {
        root = root.background(bg);
    }

    let content = Surface(
        root,
        Stack(Modifier::new().fill_max_size()).child((
            Column(Modifier::new().fill_max_size())
                .child((app_bar, body_region(ctx, slots, props))),
            footer_strip(ctx, slots.footer_buttons),
        )),
    );

    // Four compositions: no drawers, left only, right only, or right nested
    // inside left.
    match (slots.drawer, slots.end_drawer) {
        (None, None) => content,
        (Some(d), None) => drawer_host(ctx, DrawerSide::Start, d, &state.drawer_open, content),
        (None, Some(e)) => drawer_host(ctx, DrawerSide::End, e, &state.end_drawer_open, content),
        (Some(d), Some(e)) => {
            let inner = drawer_host(ctx, DrawerSide::End, e, &state.end_drawer_open, content);
            drawer_host(ctx, DrawerSide::Start, d, &state.drawer_open, inner)
        }
    }
}

/// Body slot wrapped for safe area and bottom inset. The region always
/// receives nonzero layout space even when the child declares no sizing of
/// its own; that is a correctness invariant, not cosmetics.
pub(super) fn body_region(ctx: &RenderContext, slots: &Slots<'_>, props: &ScaffoldProps) -> View {
    let inner = slots
        .body
        .map(|b| b.render(ctx))
        .unwrap_or_else(|| Box(Modifier::new().fill_max_size()));
    wrap_body(inner, props)
}

pub(super) fn wrap_body(inner: View, props: &ScaffoldProps) -> View {
    let inner = if props.enable_safe_area {
        SafeArea(Modifier::new().fill_max_size(), inner)
    } else {
        inner
    };
    let region = Modifier::new()
        .flex_grow(1.0)
        .fill_max_width()
        .min_height(1.0);
    if props.resize_to_avoid_bottom_inset {
        InsetAware(region, inner)
    } else {
        Box(region).child(inner)
    }
}

/// Absolutely positioned strip pinned to the bottom edge.
pub(super) fn footer_strip(
    ctx: &RenderContext,
    buttons: &[Rc<WidgetInstance>],
) -> Option<View> {
    if buttons.is_empty() {
        return None;
    }
    Some(
        Row(Modifier::new()
            .absolute()
            .offset(Some(0.0), None, Some(0.0), Some(0.0))
            .padding(8.0))
        .child(buttons.iter().map(|b| b.render(ctx)).collect::<Vec<_>>()),
    )
}

fn drawer_host(
    ctx: &RenderContext,
    side: DrawerSide,
    panel: &Rc<WidgetInstance>,
    open: &Signal<bool>,
    content: View,
) -> View {
    let sig = open.clone();
    View::new(
        0,
        ViewKind::Drawer {
            side,
            open: open.get(),
            on_dismiss: Some(Rc::new(move || sig.set(false))),
        },
    )
    .modifier(Modifier::new().fill_max_size())
    .with_children(vec![content, panel.render(ctx)])
}
