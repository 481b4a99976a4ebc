use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

use super::Window;
use super::WindowKind;

#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq, Display, EnumString,
    ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
/// How struts (panels, docks) are recognized among a window snapshot
pub enum StrutPolicy {
    /// Any window reporting itself as a dock is a strut
    #[default]
    WindowKind,
    /// Older flag-based rule: pinned, skip-tasklist, visible, and not
    /// the desktop window
    Heuristic,
}

/// Extract the user-controlled, arrangeable windows from a snapshot.
///
/// A window qualifies when it is not skip-tasklist, minimized,
/// maximized, or shaded, and belongs on `workspace` (`None` matches
/// everything). Input order is preserved; downstream tie-breaks depend
/// on this being a stable filter.
#[must_use]
pub fn user_windows(windows: &[Window], workspace: Option<usize>) -> Vec<Window> {
    windows
        .iter()
        .filter(|w| {
            !w.skip_tasklist
                && !w.minimized
                && !w.maximized
                && !w.shaded
                && w.on_workspace(workspace)
        })
        .copied()
        .collect()
}

/// Extract the windows that act as "hard edges" blocking the movement
/// of other windows. The prime example of a strut is a standard
/// desktop panel.
#[must_use]
pub fn strut_windows(
    windows: &[Window],
    workspace: Option<usize>,
    policy: StrutPolicy,
) -> Vec<Window> {
    windows
        .iter()
        .filter(|w| match policy {
            StrutPolicy::WindowKind => w.kind == WindowKind::Dock,
            StrutPolicy::Heuristic => {
                w.skip_tasklist
                    && w.pinned
                    && !w.minimized
                    && !w.maximized
                    && !w.shaded
                    && w.kind != WindowKind::Desktop
            }
        })
        .filter(|w| w.on_workspace(workspace))
        .copied()
        .collect()
}

/// Partition a snapshot into arrangeable windows and struts.
///
/// A window can end up in neither list (a minimized normal window) but
/// never in both.
#[must_use]
pub fn classify(
    windows: &[Window],
    workspace: Option<usize>,
    policy: StrutPolicy,
) -> (Vec<Window>, Vec<Window>) {
    (
        user_windows(windows, workspace),
        strut_windows(windows, workspace, policy),
    )
}
