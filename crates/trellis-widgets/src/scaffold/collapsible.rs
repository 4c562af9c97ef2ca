//! Collapsible app-bar strategy.
//!
//! Two header representations are composed at once and cross-faded by the
//! scroll offset: the expanded header translates up and fades out, the
//! collapsed header fades in near the end of the range. The fade windows
//! overlap on purpose so the crossfade never shows a gap.

use trellis_core::{Modifier, PaddingValues, View};

use super::app_bar::{self, AppBarSpec};
use super::{CollapseState, ScaffoldProps, Slots, basic};
use crate::context::RenderContext;
use crate::widget::WidgetInstance;
use crate::{Box, Column, ScrollColumn, Stack, Surface, ViewExt};

/// Scroll-offset window over which the collapsed header fades in, measured
/// back from the end of the collapse range. Shrinks to the range itself when
/// the range is shorter.
pub const COLLAPSED_FADE_RANGE: f32 = 30.0;

/// Scroll-offset window over which the expanded header fades out, measured
/// back from the end of the collapse range. Shrinks to the range itself when
/// the range is shorter.
pub const EXPANDED_FADE_RANGE: f32 = 50.0;

/// The collapsed header shows at most this many of the app bar's actions.
pub const COLLAPSED_MAX_ACTIONS: usize = 2;

/// Pure interpolation over the collapse range. Translation and opacity are
/// linear in the scroll offset, clamped at `0` and
/// `expanded_height - collapsed_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collapse {
    pub expanded_height: f32,
    pub collapsed_height: f32,
}

impl Collapse {
    pub fn range(&self) -> f32 {
        (self.expanded_height - self.collapsed_height).max(0.0)
    }

    fn clamped(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.range())
    }

    /// Upward translation applied to the expanded header.
    pub fn header_translation(&self, offset: f32) -> f32 {
        -self.clamped(offset)
    }

    pub fn expanded_opacity(&self, offset: f32) -> f32 {
        let window = EXPANDED_FADE_RANGE.min(self.range());
        if window <= 0.0 {
            return 1.0;
        }
        ((self.range() - self.clamped(offset)) / window).clamp(0.0, 1.0)
    }

    pub fn collapsed_opacity(&self, offset: f32) -> f32 {
        let window = COLLAPSED_FADE_RANGE.min(self.range());
        if window <= 0.0 {
            return 0.0;
        }
        ((self.clamped(offset) - (self.range() - window)) / window).clamp(0.0, 1.0)
    }

    /// The collapse/expand transition fires at the midpoint of the range.
    pub fn is_collapsed(&self, offset: f32) -> bool {
        offset > self.range() / 2.0
    }
}

pub(super) fn render(
    ctx: &RenderContext,
    ab: &WidgetInstance,
    slots: &Slots<'_>,
    props: &ScaffoldProps,
    spec: &AppBarSpec,
    state: CollapseState,
) -> View {
    let collapse = Collapse {
        expanded_height: spec.expanded_height.unwrap_or(spec.collapsed_height),
        collapsed_height: spec.collapsed_height,
    };
    let offset = state.scroll_offset.get().max(0.0);
    let is_collapsed = collapse.is_collapsed(offset);

    // Content starts below the fully expanded header and scrolls under it.
    let on_scroll = {
        let sig = state.scroll_offset.clone();
        move |off: f32| {
            let off = off.max(0.0);
            sig.set(off);
            off
        }
    };
    let scroll = ScrollColumn(
        Modifier::new().fill_max_size(),
        on_scroll,
        Column(Modifier::new().fill_max_width().padding_values(PaddingValues {
            top: collapse.expanded_height,
            ..Default::default()
        }))
        .child(basic::body_region(ctx, slots, props)),
    );

    let measured = state.measured_expanded.clone();
    let expanded = Box(Modifier::new()
        .absolute()
        .offset(Some(0.0), Some(0.0), Some(0.0), None)
        .fill_max_width()
        .height(collapse.expanded_height)
        .translate_y(collapse.header_translation(offset))
        .alpha(collapse.expanded_opacity(offset))
        .on_measured(move |sz| {
            // natural height captured once on first layout
            if measured.get().is_none() {
                measured.set(Some(sz.height));
            }
        }))
    .child(ab.render(ctx));

    // The collapsed header only ever shows when explicitly pinned, and
    // renders a reduced action set.
    let collapsed = spec.pinned.then(|| {
        Box(Modifier::new()
            .absolute()
            .offset(Some(0.0), Some(0.0), Some(0.0), None)
            .fill_max_width()
            .height(collapse.collapsed_height)
            .alpha(collapse.collapsed_opacity(offset))
            .z_index(if is_collapsed { 2.0 } else { 0.0 }))
        .child(app_bar::toolbar(
            ab,
            spec,
            ctx,
            collapse.collapsed_height,
            None,
            Some(COLLAPSED_MAX_ACTIONS),
        ))
    });

    let mut root = Modifier::new().fill_max_size();
    if let Some(bg) = props.background {
        root = root.background(bg);
    }
    Surface(
        root,
        Stack(Modifier::new().fill_max_size()).child((
            scroll,
            expanded,
            collapsed,
            basic::footer_strip(ctx, slots.footer_buttons),
        )),
    )
}

/// Header variant for the bottom-navigation strategy: tab-scoped scroll is
/// not centrally observable, so no measuring and no crossfade, just a fixed
/// expanded-height bar.
pub(super) fn simplified_header(
    ctx: &RenderContext,
    ab: &WidgetInstance,
    spec: &AppBarSpec,
) -> View {
    let h = spec.expanded_height.unwrap_or(spec.collapsed_height);
    Box(Modifier::new().fill_max_width().height(h)).child(app_bar::toolbar(
        ab, spec, ctx, h, None, None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Collapse = Collapse {
        expanded_height: 200.0,
        collapsed_height: 80.0,
    };

    #[test]
    fn at_rest_expanded_is_opaque_and_untranslated() {
        assert_eq!(C.header_translation(0.0), 0.0);
        assert_eq!(C.expanded_opacity(0.0), 1.0);
        assert_eq!(C.collapsed_opacity(0.0), 0.0);
        assert!(!C.is_collapsed(0.0));
    }

    #[test]
    fn midpoint_crossing_flips_collapsed() {
        // range = 120, midpoint = 60
        assert!(!C.is_collapsed(60.0));
        assert!(C.is_collapsed(60.5));
        assert!(C.is_collapsed(120.0));
    }

    #[test]
    fn collapsed_header_fully_opaque_at_range_end() {
        assert_eq!(C.collapsed_opacity(120.0), 1.0);
        assert_eq!(C.collapsed_opacity(500.0), 1.0);
        // fade-in starts 30 units before the end of the range
        assert_eq!(C.collapsed_opacity(90.0), 0.0);
        assert!((C.collapsed_opacity(105.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn expanded_header_fades_over_last_fifty_units() {
        // fade-out starts 50 units before the end of the range
        assert_eq!(C.expanded_opacity(70.0), 1.0);
        assert!((C.expanded_opacity(95.0) - 0.5).abs() < 1e-6);
        assert_eq!(C.expanded_opacity(120.0), 0.0);
    }

    #[test]
    fn translation_clamps_at_both_endpoints() {
        assert_eq!(C.header_translation(-20.0), 0.0);
        assert_eq!(C.header_translation(60.0), -60.0);
        assert_eq!(C.header_translation(400.0), -120.0);
    }

    #[test]
    fn short_ranges_shrink_the_fade_windows() {
        // range 34 is shorter than the expanded fade window; the window
        // shrinks so the header is still opaque at rest
        let c = Collapse {
            expanded_height: 90.0,
            collapsed_height: 56.0,
        };
        assert_eq!(c.expanded_opacity(0.0), 1.0);
        assert_eq!(c.expanded_opacity(34.0), 0.0);
        assert_eq!(c.collapsed_opacity(0.0), 0.0);
        assert_eq!(c.collapsed_opacity(34.0), 1.0);

        // degenerate zero range: nothing to collapse
        let flat = Collapse {
            expanded_height: 56.0,
            collapsed_height: 56.0,
        };
        assert_eq!(flat.expanded_opacity(200.0), 1.0);
        assert_eq!(flat.collapsed_opacity(200.0), 0.0);
        assert!(!flat.is_collapsed(0.0));
    }

    #[test]
    fn fade_windows_overlap() {
        // Both headers are partially visible between the fade starts, so
        // the crossfade never shows a gap.
        let off = 92.0;
        assert!(C.expanded_opacity(off) > 0.0);
        assert!(C.collapsed_opacity(off) > 0.0);
    }
}
