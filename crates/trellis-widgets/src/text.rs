//! Leaf text widget.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use trellis_core::{Color, View, ViewKind};

use crate::context::RenderContext;
use crate::node::WidgetData;
use crate::registry::WidgetRegistry;
use crate::widget::{Render, WidgetInstance};

pub const DEFAULT_FONT_SIZE: f32 = 14.0;

pub fn build_text(
    data: &WidgetData,
    parent: Weak<WidgetInstance>,
    _registry: &WidgetRegistry,
) -> Rc<WidgetInstance> {
    Rc::new(WidgetInstance::assemble(
        data,
        parent,
        HashMap::new(),
        Box::new(TextRender),
    ))
}

struct TextRender;

impl Render for TextRender {
    fn render(&self, widget: &WidgetInstance, ctx: &RenderContext) -> View {
        let text = ctx.eval_string(widget.prop("data")).unwrap_or_default();
        let color = widget
            .prop("color")
            .and_then(|v| ctx.eval_color_expr(v))
            .unwrap_or(Color::BLACK);
        let font_size = ctx
            .eval_f32(widget.prop("fontSize"))
            .unwrap_or(DEFAULT_FONT_SIZE);

        View::new(
            0,
            ViewKind::Text {
                text,
                color,
                font_size,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LiteralEvaluator;
    use serde_json::json;

    #[test]
    fn renders_props_with_defaults() {
        let reg = WidgetRegistry::with_defaults();
        let data = WidgetData::new("text")
            .prop("data", json!("hello"))
            .prop("color", json!("#FF0000"));
        let w = reg.create_widget(&data, Weak::new()).unwrap();

        let ctx = RenderContext::new(Rc::new(LiteralEvaluator));
        let view = w.render(&ctx);
        match view.kind {
            ViewKind::Text {
                text,
                color,
                font_size,
            } => {
                assert_eq!(text, "hello");
                assert_eq!(color, Color(255, 0, 0, 255));
                assert_eq!(font_size, DEFAULT_FONT_SIZE);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn unresolved_expression_falls_back_to_defaults() {
        let reg = WidgetRegistry::with_defaults();
        let data = WidgetData::new("text")
            .prop("data", json!("${user.name}"))
            .prop("color", json!("${theme.accent}"));
        let w = reg.create_widget(&data, Weak::new()).unwrap();

        let ctx = RenderContext::new(Rc::new(LiteralEvaluator));
        match w.render(&ctx).kind {
            ViewKind::Text { text, color, .. } => {
                assert_eq!(text, "");
                assert_eq!(color, Color::BLACK);
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }
}
