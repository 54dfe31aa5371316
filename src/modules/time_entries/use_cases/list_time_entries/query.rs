use crate::modules::time_entries::use_cases::clock_in::command::non_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTimeEntries {
    pub project_id: Option<String>,
}

impl ListTimeEntries {
    /// An empty `projectId` query parameter means no project filter.
    pub fn project_id(&self) -> Option<&str> {
        non_blank(self.project_id.as_deref())
    }
}
