#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::use_self, clippy::doc_markdown)]

//! Layout algorithms for the corral window-layout utility.
//!
//! This crate is the pure core: it classifies a snapshot of windows
//! into arrangeable windows and struts, computes the usable work area,
//! and produces either target geometries or a neighbour window to
//! activate. Reading the snapshot from the windowing environment and
//! applying the computed result back to it are the caller's concern.

use color_eyre::Result;
use color_eyre::eyre::bail;
use serde::Deserialize;
use serde::Serialize;

pub use arrangement::Arrangement;
pub use arrangement::DefaultLayout;
pub use arrangement::Placement;
pub use arrangement::grid_dimensions;
pub use bounds::calculate_bounds;
pub use classify::StrutPolicy;
pub use classify::classify;
pub use classify::strut_windows;
pub use classify::user_windows;
pub use layout::Layout;
pub use layout::LayoutOutcome;
pub use neighbour::find_neighbour;
pub use operation_direction::OperationDirection;
pub use rect::Rect;
pub use registry::LayoutDescriptor;
pub use registry::layouts;
pub use window::Window;
pub use window::WindowId;
pub use window::WindowKind;

pub mod arrangement;
pub mod bounds;
pub mod classify;
pub mod layout;
pub mod neighbour;
pub mod operation_direction;
pub mod rect;
pub mod registry;
pub mod window;

#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A snapshot of the windowing environment at one point in time.
///
/// The surrounding system is responsible for treating "take a
/// snapshot, compute, apply" as one logical transaction; the snapshot
/// itself is immutable here.
pub struct Snapshot {
    /// Full screen dimensions
    pub screen: Rect,
    /// Every window on the screen, in stacking-agnostic listing order
    pub windows: Vec<Window>,
    /// The currently focused window, if any
    #[serde(default)]
    pub active: Option<WindowId>,
    /// The current workspace; `None` considers all workspaces
    #[serde(default)]
    pub workspace: Option<usize>,
}

impl std::str::FromStr for Snapshot {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Apply a named layout to a snapshot: classify the windows, compute
/// the work area, and dispatch to the layout behind the identifier.
///
/// Unknown layout identifiers are a user error, never silently
/// ignored.
pub fn apply_layout_by_name(
    name: &str,
    snapshot: &Snapshot,
    policy: StrutPolicy,
) -> Result<LayoutOutcome> {
    let Some(descriptor) = registry::get(name) else {
        bail!("no such layout: '{name}'");
    };

    let (windows, struts) = classify(&snapshot.windows, snapshot.workspace, policy);
    let work_area = calculate_bounds(&snapshot.screen, &struts);

    Ok(descriptor.layout.apply(&work_area, &windows, snapshot.active))
}
