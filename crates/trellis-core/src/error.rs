use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// No builder is registered for the node's widget kind. Recoverable:
    /// callers substitute an empty widget or omit the subtree instead of
    /// aborting unrelated siblings.
    #[error("unknown widget kind `{0}`")]
    UnknownKind(String),
}
