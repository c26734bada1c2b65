//! Predicate construction for task and project search.
//!
//! The criteria structs hold the sparse optional filters accepted by the
//! search endpoints. `clauses()` compiles the active criteria into a flat
//! clause list combined with AND; `task_matches`/`project_matches` evaluate
//! that list against an entity in memory. The Postgres store translates the
//! same clauses into SQL, so both backends share one composition rule.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Priority, Project, Status, Task};

/// Text columns that support case-insensitive containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
}

/// A single task filter clause. Clauses are combined conjunctively; an empty
/// list matches every record.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskClause {
    StatusEq(Status),
    PriorityEq(Priority),
    /// Task belongs to the given project (foreign-key equality).
    ProjectEq(Uuid),
    DueOnOrAfter(NaiveDate),
    DueOnOrBefore(NaiveDate),
    /// Case-insensitive containment on a single text column.
    Contains(TextField, String),
    /// Convenience search: name OR description containment, AND-ed with the
    /// other clauses as one unit.
    SearchAny(String),
    IdEq(Uuid),
}

/// Optional task search criteria as accepted from the caller.
#[derive(Debug, Clone, Default)]
pub struct TaskCriteria {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub project_id: Option<Uuid>,
    pub due_date_from: Option<NaiveDate>,
    pub due_date_to: Option<NaiveDate>,
    pub search: Option<String>,
    pub name: Option<String>,
    pub id: Option<Uuid>,
}

impl TaskCriteria {
    /// Compile the active criteria into clauses. Blank and whitespace-only
    /// strings count as absent. No from/to sanity check: an inverted date
    /// range composes into a predicate that matches nothing.
    pub fn clauses(&self) -> Vec<TaskClause> {
        let mut clauses = Vec::new();

        if let Some(status) = self.status {
            clauses.push(TaskClause::StatusEq(status));
        }

        if let Some(priority) = self.priority {
            clauses.push(TaskClause::PriorityEq(priority));
        }

        if let Some(project_id) = self.project_id {
            clauses.push(TaskClause::ProjectEq(project_id));
        }

        if let Some(from) = self.due_date_from {
            clauses.push(TaskClause::DueOnOrAfter(from));
        }

        if let Some(to) = self.due_date_to {
            clauses.push(TaskClause::DueOnOrBefore(to));
        }

        if let Some(search) = active_text(&self.search) {
            clauses.push(TaskClause::SearchAny(search));
        }

        if let Some(name) = active_text(&self.name) {
            clauses.push(TaskClause::Contains(TextField::Name, name));
        }

        if let Some(id) = self.id {
            clauses.push(TaskClause::IdEq(id));
        }

        clauses
    }
}

/// A single project filter clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectClause {
    IdEq(Uuid),
    Contains(TextField, String),
}

/// Optional project search criteria as accepted from the caller.
#[derive(Debug, Clone, Default)]
pub struct ProjectCriteria {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectCriteria {
    pub fn clauses(&self) -> Vec<ProjectClause> {
        let mut clauses = Vec::new();

        if let Some(id) = self.id {
            clauses.push(ProjectClause::IdEq(id));
        }

        if let Some(name) = active_text(&self.name) {
            clauses.push(ProjectClause::Contains(TextField::Name, name));
        }

        if let Some(description) = active_text(&self.description) {
            clauses.push(ProjectClause::Contains(TextField::Description, description));
        }

        clauses
    }
}

/// Evaluate a clause list against a task.
pub fn task_matches(task: &Task, clauses: &[TaskClause]) -> bool {
    clauses.iter().all(|clause| match clause {
        TaskClause::StatusEq(status) => task.status == *status,
        TaskClause::PriorityEq(priority) => task.priority == *priority,
        TaskClause::ProjectEq(project_id) => task.project_id == Some(*project_id),
        // Range bounds never match a task without a due date, mirroring SQL
        // NULL comparison semantics.
        TaskClause::DueOnOrAfter(from) => task.due_date.is_some_and(|due| due >= *from),
        TaskClause::DueOnOrBefore(to) => task.due_date.is_some_and(|due| due <= *to),
        TaskClause::Contains(field, needle) => contains(task_text(task, *field), needle),
        TaskClause::SearchAny(needle) => {
            contains(Some(task.name.as_str()), needle)
                || contains(task.description.as_deref(), needle)
        }
        TaskClause::IdEq(id) => task.id == *id,
    })
}

/// Evaluate a clause list against a project.
pub fn project_matches(project: &Project, clauses: &[ProjectClause]) -> bool {
    clauses.iter().all(|clause| match clause {
        ProjectClause::IdEq(id) => project.id == *id,
        ProjectClause::Contains(TextField::Name, needle) => {
            contains(Some(project.name.as_str()), needle)
        }
        ProjectClause::Contains(TextField::Description, needle) => {
            contains(project.description.as_deref(), needle)
        }
    })
}

/// Treat empty and whitespace-only strings as absent filters. The original
/// (untrimmed) value is kept when active.
fn active_text(value: &Option<String>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn task_text(task: &Task, field: TextField) -> Option<&str> {
    match field {
        TextField::Name => Some(task.name.as_str()),
        TextField::Description => task.description.as_deref(),
    }
}

fn contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn task(name: &str, description: Option<&str>) -> Task {
        Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(str::to_string),
            priority: Priority::Medium,
            status: Status::Todo,
            due_date: None,
            project_id: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_criteria_compile_to_no_clauses() {
        assert!(TaskCriteria::default().clauses().is_empty());
        assert!(ProjectCriteria::default().clauses().is_empty());
    }

    #[test]
    fn zero_clauses_match_every_record() {
        assert!(task_matches(&task("anything", None), &[]));
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let criteria = TaskCriteria {
            search: Some("   ".to_string()),
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.clauses().is_empty());
    }

    #[test]
    fn active_criteria_compose_with_and() {
        let criteria = TaskCriteria {
            status: Some(Status::Todo),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let clauses = criteria.clauses();
        assert_eq!(clauses.len(), 2);

        let mut t = task("pay invoices", None);
        t.priority = Priority::High;
        assert!(task_matches(&t, &clauses));

        t.priority = Priority::Low;
        assert!(!task_matches(&t, &clauses));
    }

    #[test]
    fn search_matches_name_or_description() {
        let clauses = vec![TaskClause::SearchAny("alpha".to_string())];

        assert!(task_matches(&task("Alpha release", None), &clauses));
        assert!(task_matches(&task("cleanup", Some("part of ALPHA")), &clauses));
        assert!(!task_matches(&task("cleanup", Some("beta only")), &clauses));
        assert!(!task_matches(&task("cleanup", None), &clauses));
    }

    #[test]
    fn containment_is_case_insensitive() {
        let clauses = vec![TaskClause::Contains(TextField::Name, "FIX".to_string())];
        assert!(task_matches(&task("fix the build", None), &clauses));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let mut t = task("ship", None);
        t.due_date = Some(date(2026, 9, 15));

        assert!(task_matches(&t, &[TaskClause::DueOnOrAfter(date(2026, 9, 15))]));
        assert!(task_matches(&t, &[TaskClause::DueOnOrBefore(date(2026, 9, 15))]));
        assert!(!task_matches(&t, &[TaskClause::DueOnOrAfter(date(2026, 9, 16))]));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let criteria = TaskCriteria {
            due_date_from: Some(date(2026, 10, 1)),
            due_date_to: Some(date(2026, 9, 1)),
            ..Default::default()
        };
        let clauses = criteria.clauses();

        let mut t = task("ship", None);
        t.due_date = Some(date(2026, 9, 15));
        assert!(!task_matches(&t, &clauses));
    }

    #[test]
    fn tasks_without_due_date_never_match_range_bounds() {
        let t = task("someday", None);
        assert!(!task_matches(&t, &[TaskClause::DueOnOrAfter(date(2020, 1, 1))]));
        assert!(!task_matches(&t, &[TaskClause::DueOnOrBefore(date(2030, 1, 1))]));
    }

    #[test]
    fn project_membership_is_exact() {
        let project_id = Uuid::new_v4();
        let mut t = task("linked", None);
        t.project_id = Some(project_id);

        assert!(task_matches(&t, &[TaskClause::ProjectEq(project_id)]));
        assert!(!task_matches(&t, &[TaskClause::ProjectEq(Uuid::new_v4())]));

        t.project_id = None;
        assert!(!task_matches(&t, &[TaskClause::ProjectEq(project_id)]));
    }

    #[test]
    fn project_criteria_match_by_id_and_text() {
        let project = Project {
            id: Uuid::new_v4(),
            name: "Apollo".to_string(),
            description: Some("moonshot work".to_string()),
        };

        let criteria = ProjectCriteria {
            id: Some(project.id),
            name: Some("apo".to_string()),
            description: Some("MOON".to_string()),
        };
        assert!(project_matches(&project, &criteria.clauses()));

        let wrong_id = ProjectCriteria {
            id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(!project_matches(&project, &wrong_id.clauses()));
    }
}
