use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
/// Receives the new scroll offset, returns the clamped offset the host
/// should apply.
pub type ScrollCallback = Rc<dyn Fn(f32) -> f32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerSide {
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabBarItem {
    pub label: String,
    pub icon: Option<String>,
}

/// The visual vocabulary handed to the host toolkit.
///
/// Everything below `Text`/`Image` is a host primitive consumed at its
/// interface: the renderer never looks inside a `SafeArea`, `Drawer` or
/// `TabBar`, it only composes them.
#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Stack,
    ScrollV {
        on_scroll: Option<ScrollCallback>,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    Image {
        src: String,
    },
    /// Platform safe-area container; insets applied inside.
    SafeArea,
    /// Fills available space minus the platform bottom inset (keyboard).
    InsetAware,
    /// Platform drawer host. Children: `[content, panel]`.
    Drawer {
        side: DrawerSide,
        open: bool,
        on_dismiss: Option<Callback>,
    },
    /// Platform bottom tab bar.
    TabBar {
        items: Vec<TabBarItem>,
        selected: usize,
        on_select: Option<Rc<dyn Fn(usize)>>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::ScrollV { .. } => write!(f, "ScrollV"),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Image { src } => f.debug_struct("Image").field("src", src).finish(),
            ViewKind::SafeArea => write!(f, "SafeArea"),
            ViewKind::InsetAware => write!(f, "InsetAware"),
            ViewKind::Drawer { side, open, .. } => f
                .debug_struct("Drawer")
                .field("side", side)
                .field("open", open)
                .field("on_dismiss", &"<callback>")
                .finish(),
            ViewKind::TabBar {
                items, selected, ..
            } => f
                .debug_struct("TabBar")
                .field("items", items)
                .field("selected", selected)
                .field("on_select", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
}
