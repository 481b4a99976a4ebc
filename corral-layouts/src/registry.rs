use serde::Serialize;

use super::DefaultLayout;
use super::Layout;
use super::OperationDirection;

/// One entry in the layout registry: a stable identifier, user-facing
/// metadata, and the layout it dispatches to
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_shortcut: &'static str,
    pub layout: Layout,
}

static LAYOUTS: [LayoutDescriptor; 7] = [
    LayoutDescriptor {
        id: "expand",
        label: "Expand active window",
        description: "Expand the currently active window to fill all available space \
                      without overlapping any new windows",
        default_shortcut: "<Ctrl><Super>1",
        layout: Layout::Default(DefaultLayout::Expand),
    },
    LayoutDescriptor {
        id: "tile",
        label: "Tile all windows",
        description: "Tile all visible windows in a grid",
        default_shortcut: "<Ctrl><Super>2",
        layout: Layout::Default(DefaultLayout::Tile),
    },
    LayoutDescriptor {
        id: "twothirds",
        label: "Two thirds split",
        description: "Give the active window two thirds of the screen and stack the \
                      rest in the remaining third",
        default_shortcut: "<Ctrl><Super>3",
        layout: Layout::Default(DefaultLayout::TwoThirds),
    },
    LayoutDescriptor {
        id: "activate_left",
        label: "Activate left neighbour",
        description: "Activate the window spatially to the left of the active one",
        default_shortcut: "<Ctrl><Super>Left",
        layout: Layout::Activate(OperationDirection::Left),
    },
    LayoutDescriptor {
        id: "activate_right",
        label: "Activate right neighbour",
        description: "Activate the window spatially to the right of the active one",
        default_shortcut: "<Ctrl><Super>Right",
        layout: Layout::Activate(OperationDirection::Right),
    },
    LayoutDescriptor {
        id: "activate_up",
        label: "Activate upper neighbour",
        description: "Activate the window spatially above the active one",
        default_shortcut: "<Ctrl><Super>Up",
        layout: Layout::Activate(OperationDirection::Up),
    },
    LayoutDescriptor {
        id: "activate_down",
        label: "Activate lower neighbour",
        description: "Activate the window spatially below the active one",
        default_shortcut: "<Ctrl><Super>Down",
        layout: Layout::Activate(OperationDirection::Down),
    },
];

/// All known layouts, in presentation order
#[must_use]
pub fn layouts() -> &'static [LayoutDescriptor] {
    &LAYOUTS
}

/// Look up a layout descriptor by its exact identifier
#[must_use]
pub fn get(id: &str) -> Option<&'static LayoutDescriptor> {
    LAYOUTS.iter().find(|descriptor| descriptor.id == id)
}

/// The number of known layouts
#[must_use]
pub fn count() -> usize {
    LAYOUTS.len()
}
