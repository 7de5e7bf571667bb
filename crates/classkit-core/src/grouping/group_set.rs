use serde::{Deserialize, Serialize};

/// Ordered groups produced by one grouping invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSet(Vec<Vec<String>>);

impl GroupSet {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self(groups)
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of members in each group, in group order.
    pub fn sizes(&self) -> Vec<usize> {
        self.0.iter().map(Vec::len).collect()
    }

    /// Total members across all groups.
    pub fn member_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// One line per group, e.g. `Group 1: Amy, Ben`.
    pub fn to_clipboard_text(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, members)| format!("Group {}: {}", i + 1, members.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_inner(self) -> Vec<Vec<String>> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(groups: &[&[&str]]) -> GroupSet {
        GroupSet::new(
            groups
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn clipboard_text_numbers_groups_from_one() {
        let groups = set(&[&["Amy", "Ben"], &["Cleo"]]);
        assert_eq!(groups.to_clipboard_text(), "Group 1: Amy, Ben\nGroup 2: Cleo");
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let groups = set(&[&["Amy"], &["Ben", "Cleo"]]);
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"[["Amy"],["Ben","Cleo"]]"#);
    }

    #[test]
    fn sizes_and_member_count() {
        let groups = set(&[&["a", "b", "c"], &["d"]]);
        assert_eq!(groups.sizes(), vec![3, 1]);
        assert_eq!(groups.member_count(), 4);
        assert_eq!(groups.len(), 2);
    }
}
