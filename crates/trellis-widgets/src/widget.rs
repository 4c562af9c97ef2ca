//! Constructed widget instances.
//!
//! A [`WidgetInstance`] is the renderable counterpart of one widget node.
//! Prop bags are stored raw and evaluated only at render time, so the same
//! tree re-renders against different evaluation contexts without being
//! reconstructed. Children are owned; the parent back-reference is a `Weak`
//! set once at construction (via `Rc::new_cyclic`) and never reassigned.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde_json::{Map, Value};
use trellis_core::{Modifier, View, ViewKind};

use crate::context::RenderContext;
use crate::node::WidgetData;

/// Per-kind render behavior. Implementations own whatever transient state
/// the widget keeps across render passes.
pub trait Render {
    fn render(&self, widget: &WidgetInstance, ctx: &RenderContext) -> View;
}

pub struct WidgetInstance {
    kind: String,
    props: Map<String, Value>,
    common_props: Map<String, Value>,
    parent_props: Map<String, Value>,
    ref_name: Option<String>,
    parent: Weak<WidgetInstance>,
    children: HashMap<String, Vec<Rc<WidgetInstance>>>,
    renderer: Box<dyn Render>,
}

impl WidgetInstance {
    pub fn assemble(
        data: &WidgetData,
        parent: Weak<WidgetInstance>,
        children: HashMap<String, Vec<Rc<WidgetInstance>>>,
        renderer: Box<dyn Render>,
    ) -> Self {
        Self {
            kind: data.kind.clone(),
            props: data.props.clone(),
            common_props: data.common_props.clone(),
            parent_props: data.parent_props.clone(),
            ref_name: data.ref_name.clone(),
            parent,
            children,
            renderer,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn ref_name(&self) -> Option<&str> {
        self.ref_name.as_deref()
    }

    pub fn parent(&self) -> Option<Rc<WidgetInstance>> {
        self.parent.upgrade()
    }

    /// Raw expression-or-literal prop value; evaluation happens at the call
    /// site through the render context.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    pub fn common_prop(&self, name: &str) -> Option<&Value> {
        self.common_props.get(name)
    }

    pub fn parent_prop(&self, name: &str) -> Option<&Value> {
        self.parent_props.get(name)
    }

    /// First widget of the named group, `None` when the group is absent or
    /// empty.
    pub fn child_of(&self, name: &str) -> Option<&Rc<WidgetInstance>> {
        self.children.get(name)?.first()
    }

    /// Ordered widgets of the named group; empty slice when absent.
    pub fn children_of(&self, name: &str) -> &[Rc<WidgetInstance>] {
        self.children.get(name).map_or(&[], |v| v.as_slice())
    }

    pub fn child_groups(&self) -> &HashMap<String, Vec<Rc<WidgetInstance>>> {
        &self.children
    }

    pub fn render(&self, ctx: &RenderContext) -> View {
        self.renderer.render(self, ctx)
    }
}

/// Renders nothing. Backs the placeholder substituted for unknown widget
/// kinds so one bad node cannot take down the rest of the screen.
pub struct EmptyRender;

impl Render for EmptyRender {
    fn render(&self, _widget: &WidgetInstance, _ctx: &RenderContext) -> View {
        View::new(0, ViewKind::Box).modifier(Modifier::new())
    }
}
