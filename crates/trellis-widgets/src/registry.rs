//! Widget registry and child-group construction.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use trellis_core::WidgetError;

use crate::node::{NodeData, WidgetData};
use crate::scaffold;
use crate::text;
use crate::widget::{EmptyRender, WidgetInstance};

/// Builds one widget instance from its node data. Receives the registry so
/// builders that construct their own children can recurse without a global.
pub type WidgetBuilder =
    Rc<dyn Fn(&WidgetData, Weak<WidgetInstance>, &WidgetRegistry) -> Rc<WidgetInstance>>;

#[derive(Clone, Default)]
pub struct WidgetRegistry {
    builders: HashMap<String, WidgetBuilder>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in widget kinds.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register("text", text::build_text);
        reg.register(scaffold::app_bar::APP_BAR_KIND, scaffold::app_bar::build_app_bar);
        reg.register("scaffold", scaffold::build_scaffold);
        // structural containers the scaffold consumes through child groups
        reg.register("bottomNavigationBar", build_container);
        reg.register("bottomNavigationBarItem", build_container);
        reg
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        builder: impl Fn(&WidgetData, Weak<WidgetInstance>, &WidgetRegistry) -> Rc<WidgetInstance>
        + 'static,
    ) {
        self.builders.insert(kind.into(), Rc::new(builder));
    }

    pub fn has(&self, kind: &str) -> bool {
        self.builders.contains_key(kind)
    }

    /// Constructs the widget for `data`, recursing through the builder for
    /// nested child groups.
    pub fn create_widget(
        &self,
        data: &WidgetData,
        parent: Weak<WidgetInstance>,
    ) -> Result<Rc<WidgetInstance>, WidgetError> {
        let builder = self
            .builders
            .get(&data.kind)
            .ok_or_else(|| WidgetError::UnknownKind(data.kind.clone()))?;
        Ok(builder(data, parent, self))
    }

    /// Like [`create_widget`](Self::create_widget), but an unknown kind
    /// degrades to an empty placeholder widget instead of an error, so one
    /// unknown widget cannot crash unrelated siblings.
    pub fn create_widget_or_empty(
        &self,
        data: &WidgetData,
        parent: Weak<WidgetInstance>,
    ) -> Rc<WidgetInstance> {
        match self.create_widget(data, parent.clone()) {
            Ok(w) => w,
            Err(e) => {
                log::warn!("substituting empty widget: {e}");
                Rc::new(WidgetInstance::assemble(
                    data,
                    parent,
                    HashMap::new(),
                    Box::new(EmptyRender),
                ))
            }
        }
    }
}

/// Builder for widgets that only carry child groups. Standalone rendering
/// is a plain box holding the `children` group in order.
pub fn build_container(
    data: &WidgetData,
    parent: Weak<WidgetInstance>,
    registry: &WidgetRegistry,
) -> Rc<WidgetInstance> {
    let data = data.clone();
    let registry = registry.clone();
    Rc::new_cyclic(move |me| {
        let children = build_child_groups(&data.children, me, &registry);
        WidgetInstance::assemble(&data, parent, children, Box::new(ContainerRender))
    })
}

struct ContainerRender;

impl crate::widget::Render for ContainerRender {
    fn render(
        &self,
        widget: &WidgetInstance,
        ctx: &crate::context::RenderContext,
    ) -> trellis_core::View {
        let kids = widget
            .children_of("children")
            .iter()
            .map(|c| c.render(ctx))
            .collect();
        trellis_core::View::new(0, trellis_core::ViewKind::Box).with_children(kids)
    }
}

/// Converts named groups of child node data into named groups of widget
/// instances wired to `parent`.
///
/// Non-widget variants (state, component) are silently dropped from each
/// group; the relative order of the remaining entries is preserved. An
/// unknown widget kind inside a group is logged and omitted, leaving its
/// siblings intact. Empty or absent input yields an empty map.
pub fn build_child_groups(
    groups: &HashMap<String, Vec<NodeData>>,
    parent: &Weak<WidgetInstance>,
    registry: &WidgetRegistry,
) -> HashMap<String, Vec<Rc<WidgetInstance>>> {
    let mut out = HashMap::with_capacity(groups.len());
    for (name, nodes) in groups {
        let widgets = nodes
            .iter()
            .filter_map(NodeData::as_widget)
            .filter_map(|data| match registry.create_widget(data, parent.clone()) {
                Ok(w) => Some(w),
                Err(e) => {
                    log::warn!("dropping child in group `{name}`: {e}");
                    None
                }
            })
            .collect();
        out.insert(name.clone(), widgets);
    }
    out
}
