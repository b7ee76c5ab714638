//! Canned quick actions
//!
//! Fixed, labeled command lines a front end can offer as one-click buttons.
//! Running one goes through the normal execute path, so policy checks and
//! the timeout still apply.

/// A labeled canned invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Short identifier for lookup (e.g. from a CLI argument)
    pub slug: &'static str,
    /// Human-readable button label
    pub label: &'static str,
    /// Command line to run
    pub command: &'static str,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        slug: "files",
        label: "List Files",
        command: "ls -la",
    },
    QuickAction {
        slug: "disk",
        label: "Disk Usage",
        command: "df -h",
    },
    QuickAction {
        slug: "processes",
        label: "Processes",
        command: "ps aux | head -10",
    },
];

impl QuickAction {
    /// All quick actions, in display order
    pub fn all() -> &'static [QuickAction] {
        QUICK_ACTIONS
    }

    /// Look up an action by its slug
    pub fn find(slug: &str) -> Option<&'static QuickAction> {
        QUICK_ACTIONS.iter().find(|action| action.slug == slug)
    }
}
