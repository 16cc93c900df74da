use crate::issue::{IssuePriority, IssueStatus};

/// Constraints narrowing the issue list query.
///
/// Text fields are matched by the server (title substring for `search`, assignee substring for
/// `assignee`); `status` and `priority` are exact matches. Empty constraints are never sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueFilter {
    pub search: String,
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub assignee: String,
}

impl IssueFilter {
    /// Query parameters for `GET /issues`, containing only the constraints that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if !self.assignee.is_empty() {
            pairs.push(("assignee", self.assignee.clone()));
        }
        pairs
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Sets the status from a `<select>` value, where the empty string means "any".
    pub fn set_status_str(&mut self, value: &str) {
        self.status = value.parse().ok();
    }

    /// Sets the priority from a `<select>` value, where the empty string means "any".
    pub fn set_priority_str(&mut self, value: &str) {
        self.priority = value.parse().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_no_parameters() {
        let filter = IssueFilter::default();

        assert!(filter.query_pairs().is_empty());
        assert!(filter.is_empty());
    }

    #[test]
    fn only_status_is_sent_when_other_fields_are_empty() {
        let filter = IssueFilter {
            search: String::new(),
            status: Some(IssueStatus::Open),
            priority: None,
            assignee: String::new(),
        };

        assert_eq!(filter.query_pairs(), vec![("status", "Open".to_string())]);
    }

    #[test]
    fn all_set_fields_are_sent_in_order() {
        let filter = IssueFilter {
            search: "crash".to_string(),
            status: Some(IssueStatus::InProgress),
            priority: Some(IssuePriority::High),
            assignee: "alice".to_string(),
        };

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("search", "crash".to_string()),
                ("status", "InProgress".to_string()),
                ("priority", "High".to_string()),
                ("assignee", "alice".to_string()),
            ]
        );
    }

    #[test]
    fn select_values_update_enum_constraints() {
        let mut filter = IssueFilter::default();

        filter.set_status_str("Done");
        filter.set_priority_str("Low");
        assert_eq!(filter.status, Some(IssueStatus::Done));
        assert_eq!(filter.priority, Some(IssuePriority::Low));

        // The "All" option has an empty value
        filter.set_status_str("");
        filter.set_priority_str("");
        assert_eq!(filter.status, None);
        assert_eq!(filter.priority, None);
    }
}
