//! Render-time collaborators.
//!
//! Expression evaluation and action dispatch are external systems. Widgets
//! see them only through the traits here: both are total, an unresolved
//! expression is `None`, and defaults are applied at the call site
//! (`.unwrap_or(true)`, `.unwrap_or(Color::BLACK)`), never by the evaluator.

use std::rc::Rc;

use serde_json::Value;
use trellis_core::{Color, View};

pub trait Evaluator {
    /// Resolves an expression-or-literal value. `None` means unresolved or
    /// absent; this never fails.
    fn eval_expr(&self, expr: &Value) -> Option<Value>;

    /// Resolves an expression-or-literal into a concrete color.
    fn eval_color_expr(&self, expr: &Value) -> Option<Color>;
}

/// Action-dispatch collaborator. Only the bottom-navigation strategy uses
/// it; absence is a valid, handled state.
pub trait ActionExecutor {
    /// Builds the view registered for `id`, or `None` when no builder is
    /// available for it.
    fn build_view(&self, id: &str, args: &Value) -> Option<View>;
}

#[derive(Clone)]
pub struct RenderContext {
    evaluator: Rc<dyn Evaluator>,
    actions: Option<Rc<dyn ActionExecutor>>,
}

impl RenderContext {
    pub fn new(evaluator: Rc<dyn Evaluator>) -> Self {
        Self {
            evaluator,
            actions: None,
        }
    }

    pub fn with_actions(mut self, actions: Rc<dyn ActionExecutor>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn eval_expr(&self, expr: &Value) -> Option<Value> {
        self.evaluator.eval_expr(expr)
    }

    pub fn eval_color_expr(&self, expr: &Value) -> Option<Color> {
        self.evaluator.eval_color_expr(expr)
    }

    pub fn eval_bool(&self, expr: Option<&Value>) -> Option<bool> {
        self.eval_expr(expr?)?.as_bool()
    }

    pub fn eval_f32(&self, expr: Option<&Value>) -> Option<f32> {
        Some(self.eval_expr(expr?)?.as_f64()? as f32)
    }

    pub fn eval_string(&self, expr: Option<&Value>) -> Option<String> {
        match self.eval_expr(expr?)? {
            Value::String(s) => Some(s),
            // numbers and booleans display fine as text
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Resolves an expression-or-literal and reports whether it is truthy
    /// (present, not `false`/`null`/`0`/`""`).
    pub fn eval_truthy(&self, expr: Option<&Value>) -> bool {
        self.eval_expr(match expr {
            Some(e) => e,
            None => return false,
        })
        .map(|v| truthy(&v))
        .unwrap_or(false)
    }

    pub fn view_builder(&self, id: &str, args: &Value) -> Option<View> {
        self.actions.as_ref()?.build_view(id, args)
    }
}

pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Evaluator for hosts without an expression engine: literals pass through,
/// `${...}` expression strings stay unresolved, `#RRGGBB[AA]` strings parse
/// as colors.
pub struct LiteralEvaluator;

impl Evaluator for LiteralEvaluator {
    fn eval_expr(&self, expr: &Value) -> Option<Value> {
        match expr {
            Value::Null => None,
            Value::String(s) if s.contains("${") => None,
            v => Some(v.clone()),
        }
    }

    fn eval_color_expr(&self, expr: &Value) -> Option<Color> {
        match self.eval_expr(expr)? {
            Value::String(s) if s.starts_with('#') => Some(Color::from_hex(&s)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> RenderContext {
        RenderContext::new(Rc::new(LiteralEvaluator))
    }

    #[test]
    fn literals_pass_through() {
        let c = ctx();
        assert_eq!(c.eval_bool(Some(&json!(true))), Some(true));
        assert_eq!(c.eval_f32(Some(&json!(200))), Some(200.0));
        assert_eq!(c.eval_string(Some(&json!("hi"))).as_deref(), Some("hi"));
    }

    #[test]
    fn expressions_stay_unresolved() {
        let c = ctx();
        assert_eq!(c.eval_expr(&json!("${user.name}")), None);
        // caller default applies
        assert!(c.eval_bool(Some(&json!("${flags.safeArea}"))).unwrap_or(true));
    }

    #[test]
    fn color_literals_parse() {
        let c = ctx();
        assert_eq!(
            c.eval_color_expr(&json!("#FF5733")),
            Some(Color(255, 87, 51, 255))
        );
        assert_eq!(c.eval_color_expr(&json!("red")), None);
        assert_eq!(c.eval_color_expr(&json!(12)), None);
    }

    #[test]
    fn truthiness() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(200)));
        assert!(truthy(&json!("x")));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }
}
