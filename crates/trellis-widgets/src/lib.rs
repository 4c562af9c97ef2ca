#![allow(non_snake_case)]
//! # Trellis widgets
//!
//! Server-driven widget construction and rendering. A JSON-shaped
//! [`NodeData`] tree is turned into a [`WidgetInstance`] tree through the
//! [`WidgetRegistry`]; asking the root to `render` against a
//! [`RenderContext`] produces the [`View`] tree handed to the host toolkit,
//! re-evaluating data-bound expressions on every pass.
//!
//! ```rust
//! use std::rc::{Rc, Weak};
//! use trellis_widgets::*;
//! use serde_json::json;
//!
//! let registry = WidgetRegistry::with_defaults();
//! let data = WidgetData::new("scaffold").child_group(
//!     "body",
//!     vec![WidgetData::new("text").prop("data", json!("hello")).into_node()],
//! );
//!
//! let root = registry.create_widget(&data, Weak::new()).unwrap();
//! let ctx = RenderContext::new(Rc::new(LiteralEvaluator));
//! let _view = root.render(&ctx);
//! ```

pub mod context;
pub mod node;
pub mod registry;
pub mod scaffold;
pub mod text;
pub mod widget;

pub use context::{ActionExecutor, Evaluator, LiteralEvaluator, RenderContext, truthy};
pub use node::{ComponentData, NodeData, StateData, WidgetData};
pub use registry::{WidgetBuilder, WidgetRegistry, build_child_groups};
pub use widget::{EmptyRender, Render, WidgetInstance};

use std::rc::Rc;

use trellis_core::{Modifier, View, ViewKind};

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: trellis_core::Color::BLACK,
            font_size: text::DEFAULT_FONT_SIZE,
        },
    )
}

pub fn Image(modifier: Modifier, src: impl Into<String>) -> View {
    View::new(0, ViewKind::Image { src: src.into() }).modifier(modifier)
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

pub fn SafeArea(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::SafeArea)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn InsetAware(modifier: Modifier, child: View) -> View {
    View::new(0, ViewKind::InsetAware)
        .modifier(modifier)
        .with_children(vec![child])
}

/// Vertical scroll container reporting offset changes through `on_scroll`.
pub fn ScrollColumn(
    modifier: Modifier,
    on_scroll: impl Fn(f32) -> f32 + 'static,
    content: View,
) -> View {
    View::new(
        0,
        ViewKind::ScrollV {
            on_scroll: Some(Rc::new(on_scroll)),
        },
    )
    .modifier(modifier)
    .with_children(vec![content])
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
