// Link list model: the shape of the JSON file and the edits the wizard
// can make to it. Nothing here touches the terminal or the filesystem so
// every menu action can be unit tested.

use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Icon shown (and stored on add) when a link has none.
pub const DEFAULT_ICON: &str = "fas fa-link";

/// One entry of the `links` array. Keys we don't know about are kept in
/// `extra` so a save never drops data written by the web app.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: impl Into<String>) -> Self {
        Link {
            name: name.into(),
            url: url.into(),
            icon: Some(icon.into()),
            extra: Map::new(),
        }
    }

    /// Icon class to display, falling back to [`DEFAULT_ICON`].
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Whole contents of the links file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LinksConfig {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Replacement values for [`LinksConfig::edit`]. Blank fields keep the
/// current value.
#[derive(Debug, Default, Clone)]
pub struct LinkUpdate {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl LinksConfig {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Append a new link. Name and URL are required; a blank icon becomes
    /// [`DEFAULT_ICON`].
    pub fn add(&mut self, name: &str, url: &str, icon: &str) -> Result<&Link, LinkError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LinkError::EmptyName);
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(LinkError::EmptyUrl);
        }
        let icon = match icon.trim() {
            "" => DEFAULT_ICON,
            icon => icon,
        };
        self.links.push(Link::new(name, url, icon));
        Ok(&self.links[self.links.len() - 1])
    }

    /// Update the link at `index` (0-based).
    pub fn edit(&mut self, index: usize, update: &LinkUpdate) -> Result<&Link, LinkError> {
        let link = self.get_mut(index)?;
        let name = update.name.trim();
        if !name.is_empty() {
            link.name = name.to_string();
        }
        let url = update.url.trim();
        if !url.is_empty() {
            link.url = url.to_string();
        }
        let icon = update.icon.trim();
        if !icon.is_empty() {
            link.icon = Some(icon.to_string());
        }
        Ok(link)
    }

    /// Remove and return the link at `index` (0-based).
    pub fn remove(&mut self, index: usize) -> Result<Link, LinkError> {
        self.get_mut(index)?;
        Ok(self.links.remove(index))
    }

    /// Rearrange links so that position `i` holds the link previously at
    /// `order[i]`. `order` must be a permutation of `0..len`.
    pub fn reorder(&mut self, order: &[usize]) -> Result<(), LinkError> {
        if self.links.is_empty() {
            return Err(LinkError::NoLinks);
        }
        if !is_permutation(order, self.links.len()) {
            return Err(LinkError::InvalidOrder);
        }
        let mut slots: Vec<Option<Link>> = self.links.drain(..).map(Some).collect();
        self.links = order.iter().filter_map(|&i| slots[i].take()).collect();
        Ok(())
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Link, LinkError> {
        if self.links.is_empty() {
            return Err(LinkError::NoLinks);
        }
        self.links.get_mut(index).ok_or(LinkError::InvalidSelection)
    }
}

/// Parse a user-entered order such as `"3, 1, 2"` (1-based) into 0-based
/// indices and check it covers every one of `len` links exactly once.
pub fn parse_order(input: &str, len: usize) -> Result<Vec<usize>, LinkError> {
    let mut order = Vec::with_capacity(len);
    for part in input.split(',') {
        let n: usize = part.trim().parse().map_err(|_| LinkError::InvalidNumber)?;
        // 0 can't be shifted down to an index
        let idx = n.checked_sub(1).ok_or(LinkError::InvalidOrder)?;
        order.push(idx);
    }
    if !is_permutation(&order, len) {
        return Err(LinkError::InvalidOrder);
    }
    Ok(order)
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinksConfig {
        let mut cfg = LinksConfig::default();
        cfg.add("GitHub", "https://github.com", "fab fa-github").unwrap();
        cfg.add("Docs", "docs.html", "").unwrap();
        cfg.add("Blog", "https://blog.example.com", "fas fa-globe").unwrap();
        cfg
    }

    fn names(cfg: &LinksConfig) -> Vec<&str> {
        cfg.links.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn add_trims_and_defaults_icon() {
        let mut cfg = LinksConfig::default();
        let link = cfg.add("  Home ", " index.html ", "   ").unwrap();
        assert_eq!(link.name, "Home");
        assert_eq!(link.url, "index.html");
        assert_eq!(link.icon.as_deref(), Some(DEFAULT_ICON));
    }

    #[test]
    fn add_rejects_empty_fields() {
        let mut cfg = LinksConfig::default();
        assert_eq!(cfg.add(" ", "x", "").unwrap_err(), LinkError::EmptyName);
        assert_eq!(cfg.add("x", "", "").unwrap_err(), LinkError::EmptyUrl);
        assert!(cfg.is_empty());
    }

    #[test]
    fn edit_keeps_blank_fields() {
        let mut cfg = sample();
        let update = LinkUpdate {
            name: String::new(),
            url: "https://example.org/docs".into(),
            icon: " ".into(),
        };
        let link = cfg.edit(1, &update).unwrap();
        assert_eq!(link.name, "Docs");
        assert_eq!(link.url, "https://example.org/docs");
        assert_eq!(link.icon_or_default(), DEFAULT_ICON);
    }

    #[test]
    fn edit_and_remove_check_bounds() {
        let mut cfg = sample();
        assert_eq!(cfg.edit(3, &LinkUpdate::default()).unwrap_err(), LinkError::InvalidSelection);
        assert_eq!(cfg.remove(7).unwrap_err(), LinkError::InvalidSelection);
        assert_eq!(cfg.len(), 3);

        let mut empty = LinksConfig::default();
        assert_eq!(empty.remove(0).unwrap_err(), LinkError::NoLinks);
    }

    #[test]
    fn remove_returns_link() {
        let mut cfg = sample();
        let removed = cfg.remove(0).unwrap();
        assert_eq!(removed.name, "GitHub");
        assert_eq!(names(&cfg), ["Docs", "Blog"]);
    }

    #[test]
    fn reorder_applies_permutation() {
        let mut cfg = sample();
        let order = parse_order("3, 1,2", cfg.len()).unwrap();
        assert_eq!(order, [2, 0, 1]);
        cfg.reorder(&order).unwrap();
        assert_eq!(names(&cfg), ["Blog", "GitHub", "Docs"]);
    }

    #[test]
    fn parse_order_rejects_bad_input() {
        assert_eq!(parse_order("1,2", 3).unwrap_err(), LinkError::InvalidOrder);
        assert_eq!(parse_order("1,1,2", 3).unwrap_err(), LinkError::InvalidOrder);
        assert_eq!(parse_order("1,2,4", 3).unwrap_err(), LinkError::InvalidOrder);
        assert_eq!(parse_order("0,1,2", 3).unwrap_err(), LinkError::InvalidOrder);
        assert_eq!(parse_order("1,two,3", 3).unwrap_err(), LinkError::InvalidNumber);
        assert_eq!(parse_order("", 3).unwrap_err(), LinkError::InvalidNumber);
    }

    #[test]
    fn failed_reorder_leaves_list_untouched() {
        let mut cfg = sample();
        assert_eq!(cfg.reorder(&[0, 0, 1]).unwrap_err(), LinkError::InvalidOrder);
        assert_eq!(names(&cfg), ["GitHub", "Docs", "Blog"]);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = r#"{"title":"My links","links":[{"name":"A","url":"a.html","target":"_blank"}]}"#;
        let cfg: LinksConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.links[0].icon_or_default(), DEFAULT_ICON);

        let back: Value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(back["title"], "My links");
        assert_eq!(back["links"][0]["target"], "_blank");
        assert!(back["links"][0].get("icon").is_none());
    }

    #[test]
    fn save_keeps_file_key_order() {
        let raw = r#"{"title":"My links","links":[{"url":"a.html","name":"A","target":"_blank","icon":"fas fa-a"}],"footer":"x"}"#;
        let cfg: LinksConfig = serde_json::from_str(raw).unwrap();

        let top: Vec<String> = match serde_json::to_value(&cfg).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        };
        // known fields come first, unknown keys keep their file order
        assert_eq!(top, ["links", "title", "footer"]);

        let text = serde_json::to_string(&cfg).unwrap();
        assert!(text.find("\"title\"").unwrap() < text.find("\"footer\"").unwrap());
    }

    #[test]
    fn missing_links_key_is_empty() {
        let cfg: LinksConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.is_empty());
    }
}
