use std::sync::Arc;

use crate::{PanelError, Result};

/// Names used both as random senders and as mention candidates.
const DEFAULT_NAMES: &[&str] = &["Alan", "Bob", "Carol", "Dean", "Elin"];

/// Immutable, ordered set of display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Arc<[String]>,
}

impl Roster {
    /// Builds a roster from `names`, trimming each one.
    ///
    /// Order is preserved. Empty rosters, blank names and duplicates are
    /// rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(PanelError::BlankRosterName);
            }
            if collected.iter().any(|existing| existing == name) {
                return Err(PanelError::DuplicateRosterName(name.to_owned()));
            }
            collected.push(name.to_owned());
        }

        if collected.is_empty() {
            return Err(PanelError::EmptyRoster);
        }

        Ok(Self {
            names: collected.into(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true for a constructed roster.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_keeps_order() {
        let roster = Roster::default();
        assert_eq!(roster.names(), ["Alan", "Bob", "Carol", "Dean", "Elin"]);
        assert_eq!(roster.get(2), Some("Carol"));
        assert_eq!(roster.get(5), None);
    }

    #[test]
    fn names_are_trimmed() {
        let roster = Roster::new(["  Ada ", "Grace"]).unwrap();
        assert!(roster.contains("Ada"));
        assert!(!roster.contains("  Ada "));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn rejects_bad_rosters() {
        assert_eq!(
            Roster::new(Vec::<String>::new()),
            Err(PanelError::EmptyRoster)
        );
        assert_eq!(Roster::new(["Ada", "   "]), Err(PanelError::BlankRosterName));
        assert_eq!(
            Roster::new(["Ada", "Grace", " Ada"]),
            Err(PanelError::DuplicateRosterName("Ada".into()))
        );
    }
}
