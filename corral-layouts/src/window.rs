use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

use super::Rect;

/// Opaque handle to a window owned by the windowing environment
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WindowId(pub u64);

#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq, Display, EnumString,
    ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    #[default]
    Normal,
    Dock,
    Desktop,
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// One window as captured in a snapshot of the windowing environment.
///
/// Immutable for the duration of a layout computation; layouts only
/// produce new target rectangles, they never mutate a `Window`.
pub struct Window {
    pub id: WindowId,
    /// Current geometry in absolute screen coordinates
    pub rect: Rect,
    #[serde(default)]
    pub kind: WindowKind,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default)]
    pub shaded: bool,
    #[serde(default)]
    pub skip_tasklist: bool,
    #[serde(default)]
    pub pinned: bool,
    /// `None` means the window appears on all workspaces
    #[serde(default)]
    pub workspace: Option<usize>,
}

impl Window {
    #[must_use]
    pub const fn new(id: u64, rect: Rect) -> Self {
        Self {
            id: WindowId(id),
            rect,
            kind: WindowKind::Normal,
            minimized: false,
            maximized: false,
            shaded: false,
            skip_tasklist: false,
            pinned: false,
            workspace: None,
        }
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        self.rect.center()
    }

    /// Whether this window belongs on the given workspace; `None` on
    /// either side means "all workspaces".
    #[must_use]
    pub fn on_workspace(&self, workspace: Option<usize>) -> bool {
        match (workspace, self.workspace) {
            (None, _) | (_, None) => true,
            (Some(current), Some(own)) => current == own,
        }
    }
}
