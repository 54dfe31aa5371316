use crate::modules::time_entries::core::actor::User;
use crate::modules::time_entries::core::policy::AccrualPolicy;
use crate::modules::time_entries::core::project::Project;
use crate::modules::time_entries::core::time_entry::TimeEntry;

pub fn can_view_all_entries(actor: &User) -> bool {
    actor.role.is_elevated()
}

pub fn can_mutate_entry(actor: &User, entry: &TimeEntry) -> bool {
    actor.id == entry.user_id || actor.role.is_elevated()
}

/// True when the mutation must be stamped with `edited_by_manager_id`.
pub fn is_manager_correction(actor: &User, entry: &TimeEntry) -> bool {
    actor.id != entry.user_id && actor.role.is_elevated()
}

pub fn can_log_time_on(actor: &User, project: &Project, policy: &AccrualPolicy) -> bool {
    !policy.enforce_project_crew
        || project.crew.is_empty()
        || actor.role.is_elevated()
        || project.has_crew_member(&actor.id)
}
