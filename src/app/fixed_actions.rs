use crate::domain::models::{ActionItem, Mode};

pub const OPEN_TAB: &str = "open-tab";
pub const DUPLICATE_TAB: &str = "duplicate-tab";
pub const SEARCH_BOOKMARKS: &str = "search-bookmarks";
pub const OPEN_HISTORY_TAB: &str = "open-history-tab";
pub const OPEN_DOWNLOADS_TAB: &str = "open-downloads-tab";
pub const OPEN_EXTENSIONS_TAB: &str = "open-extensions-tab";
pub const OPEN_SETTINGS_TAB: &str = "open-settings-tab";
pub const OPEN_HELP_TAB: &str = "open-help-tab";
pub const ABOUT_EXTENSION: &str = "about-extension";

#[derive(Debug, Clone)]
struct FixedAction {
    action: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    url: Option<&'static str>,
    mode_trigger: Option<Mode>,
}

const FIXED_ACTIONS: &[FixedAction] = &[
    FixedAction {
        action: DUPLICATE_TAB,
        title: "Duplicate",
        description: "Duplicate current tab",
        icon: "copy-plus",
        url: None,
        mode_trigger: None,
    },
    FixedAction {
        action: SEARCH_BOOKMARKS,
        title: "Bookmarks",
        description: "Search bookmarks",
        icon: "bookmark",
        url: None,
        mode_trigger: Some(Mode::Bookmarks),
    },
    FixedAction {
        action: OPEN_HISTORY_TAB,
        title: "History",
        description: "Search browser history",
        icon: "history",
        url: None,
        mode_trigger: Some(Mode::History),
    },
    FixedAction {
        action: OPEN_DOWNLOADS_TAB,
        title: "Downloads",
        description: "Open browser downloads",
        icon: "folder-down",
        url: Some("chrome://downloads"),
        mode_trigger: None,
    },
    FixedAction {
        action: OPEN_EXTENSIONS_TAB,
        title: "Extensions",
        description: "Manage browser extensions",
        icon: "blocks",
        url: Some("chrome://extensions"),
        mode_trigger: None,
    },
    FixedAction {
        action: OPEN_SETTINGS_TAB,
        title: "Settings",
        description: "Open browser settings page",
        icon: "cog",
        url: Some("chrome://settings"),
        mode_trigger: None,
    },
    FixedAction {
        action: OPEN_HELP_TAB,
        title: "Help",
        description: "Open browser help page",
        icon: "badge-question-mark",
        url: Some("chrome://help"),
        mode_trigger: None,
    },
    FixedAction {
        action: ABOUT_EXTENSION,
        title: "About the extension",
        description: "More information about the extension",
        icon: "badge-info",
        url: None,
        mode_trigger: None,
    },
];

/// Browser-level operations always offered in the default mode. The
/// description doubles as the `domain` so it takes part in scoring.
#[must_use]
pub fn fixed_actions() -> Vec<ActionItem> {
    FIXED_ACTIONS
        .iter()
        .map(|fixed| ActionItem {
            title: fixed.title.to_string(),
            url: fixed.url.map(str::to_string),
            domain: Some(fixed.description.to_string()),
            action: Some(fixed.action.to_string()),
            mode_trigger: fixed.mode_trigger,
            icon: Some(fixed.icon.to_string()),
            ..Default::default()
        })
        .collect()
}

/// Appends each fixed action whose identifier the fetched list doesn't
/// already carry. Fetched items win collisions; fixed actions are never
/// deduplicated against one another.
pub fn merge_fixed_actions(fetched: &mut Vec<ActionItem>, fixed: &[ActionItem]) {
    let missing: Vec<ActionItem> = fixed
        .iter()
        .filter(|candidate| {
            !fetched
                .iter()
                .any(|item| item.action.is_some() && item.action == candidate.action)
        })
        .cloned()
        .collect();
    fetched.extend(missing);
}
