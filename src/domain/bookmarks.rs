use crate::domain::models::ActionItem;
use serde::Deserialize;

/// A node of the browser's bookmark tree. Folders have `children`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BookmarkNode {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<BookmarkNode>>,
}

/// Flattens a bookmark tree into leaf items. Each item's `path` is the
/// slash-joined chain of folders above it.
pub fn flatten(nodes: &[BookmarkNode]) -> Vec<ActionItem> {
    let mut items = Vec::new();
    walk(nodes, "", &mut items);
    items
}

fn walk(nodes: &[BookmarkNode], parent: &str, items: &mut Vec<ActionItem>) {
    for node in nodes {
        match &node.children {
            Some(children) => {
                let path = if parent.is_empty() {
                    node.title.clone()
                } else {
                    format!("{parent}/{}", node.title)
                };
                walk(children, &path, items);
            }
            None => {
                let Some(url) = &node.url else { continue };
                let mut item = ActionItem::page(node.title.clone(), url.clone());
                item.path = Some(parent.to_string());
                items.push(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str, url: &str) -> BookmarkNode {
        BookmarkNode {
            title: title.to_string(),
            url: Some(url.to_string()),
            children: None,
        }
    }

    fn folder(title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode {
            title: title.to_string(),
            url: None,
            children: Some(children),
        }
    }

    #[test]
    fn test_flatten_builds_paths() {
        let tree = vec![
            folder(
                "Bookmarks bar",
                vec![
                    leaf("Rust", "https://www.rust-lang.org/"),
                    folder("Work", vec![leaf("CI", "https://ci.example.com/builds")]),
                ],
            ),
            leaf("Loose", "https://example.org"),
        ];

        let items = flatten(&tree);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "Rust");
        assert_eq!(items[0].path.as_deref(), Some("Bookmarks bar"));
        assert_eq!(items[0].domain.as_deref(), Some("www.rust-lang.org"));

        assert_eq!(items[1].title, "CI");
        assert_eq!(items[1].path.as_deref(), Some("Bookmarks bar/Work"));

        assert_eq!(items[2].path.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_folder_yields_nothing() {
        assert!(flatten(&[folder("Empty", vec![])]).is_empty());
    }
}
