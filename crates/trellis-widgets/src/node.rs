//! JSON-shaped node data: the declarative description a server sends down.
//!
//! A tree is a mix of node variants, but only the widget-bearing variant is
//! ever turned into a widget instance. State and component nodes ride along
//! in child groups (so an author can declare them next to widget children)
//! and are filtered out during child-group construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum NodeData {
    Widget(WidgetData),
    State(StateData),
    Component(ComponentData),
}

impl NodeData {
    pub fn as_widget(&self) -> Option<&WidgetData> {
        match self {
            NodeData::Widget(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_widget(&self) -> bool {
        matches!(self, NodeData::Widget(_))
    }
}

/// One widget node: a kind, three prop bags (any value may be an expression
/// resolved at render time), an optional reference name, and named groups of
/// ordered child nodes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetData {
    #[serde(rename = "type")]
    pub kind: String,
    pub props: Map<String, Value>,
    pub common_props: Map<String, Value>,
    pub parent_props: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    pub children: HashMap<String, Vec<NodeData>>,
}

impl WidgetData {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    pub fn ref_name(mut self, name: impl Into<String>) -> Self {
        self.ref_name = Some(name.into());
        self
    }

    pub fn child_group(mut self, name: impl Into<String>, nodes: Vec<NodeData>) -> Self {
        self.children.insert(name.into(), nodes);
        self
    }

    pub fn into_node(self) -> NodeData {
        NodeData::Widget(self)
    }
}

/// Non-rendering state declaration. Never convertible to a widget.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateData {
    pub name: String,
    pub initial: Value,
}

/// Reference to an externally resolved component. Never convertible to a
/// widget directly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentData {
    pub id: String,
    pub args: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widget_node_round_trips_through_json() {
        let data = json!({
            "node": "widget",
            "type": "text",
            "props": { "data": "hello" },
            "refName": "greeting",
            "children": {
                "trailing": [
                    { "node": "state", "name": "counter", "initial": 0 }
                ]
            }
        });

        let node: NodeData = serde_json::from_value(data).unwrap();
        let w = node.as_widget().expect("widget variant");
        assert_eq!(w.kind, "text");
        assert_eq!(w.ref_name.as_deref(), Some("greeting"));
        assert_eq!(w.props["data"], json!("hello"));
        assert_eq!(w.children["trailing"].len(), 1);
        assert!(!w.children["trailing"][0].is_widget());
    }

    #[test]
    fn missing_optional_fields_default() {
        let node: NodeData =
            serde_json::from_value(json!({ "node": "widget", "type": "scaffold" })).unwrap();
        let w = node.as_widget().unwrap();
        assert!(w.props.is_empty());
        assert!(w.children.is_empty());
        assert!(w.ref_name.is_none());
    }

    #[test]
    fn state_and_component_are_not_widgets() {
        let s: NodeData =
            serde_json::from_value(json!({ "node": "state", "name": "n" })).unwrap();
        let c: NodeData =
            serde_json::from_value(json!({ "node": "component", "id": "detail" })).unwrap();
        assert!(s.as_widget().is_none());
        assert!(c.as_widget().is_none());
    }
}
