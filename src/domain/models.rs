use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier attached to a candidate by its source, e.g. a browser tab id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{n}"),
            ItemId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Active filter context of the palette. `Default` is the empty mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Default,
    Bookmarks,
    History,
}

impl Mode {
    pub fn id(self) -> &'static str {
        match self {
            Mode::Default => "",
            Mode::Bookmarks => "bookmarks",
            Mode::History => "history",
        }
    }

    /// Unknown and empty identifiers fall back to the default mode.
    pub fn from_id(id: &str) -> Self {
        match id {
            "bookmarks" => Mode::Bookmarks,
            "history" => Mode::History,
            _ => Mode::Default,
        }
    }

    pub fn is_default(self) -> bool {
        self == Mode::Default
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Default => write!(f, "default"),
            other => write!(f, "{}", other.id()),
        }
    }
}

/// Raw list a mode draws its candidates from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SourceOperation {
    ListOpenTabs,
    ListBookmarks,
    ListHistory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub mode_trigger: Option<Mode>,
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ActionItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builds a page item, deriving `domain` from the url's hostname.
    pub fn page(title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            title: title.into(),
            domain: hostname(&url),
            url: Some(url),
            ..Default::default()
        }
    }
}

/// Hostname of `url`, or `None` when it does not parse or has no host.
pub fn hostname(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// A candidate after ranking. `score` is `None` for pass-through results.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredActionItem {
    pub item: ActionItem,
    pub score: Option<u32>,
}

impl ScoredActionItem {
    pub fn unscored(item: ActionItem) -> Self {
        Self { item, score: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Tab(ItemId),
    Url(String),
    None,
}

/// Fire-and-forget request handed to the gateway when an item is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteRequest {
    pub operation: String,
    pub target: Target,
}
