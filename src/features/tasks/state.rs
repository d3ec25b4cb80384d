use crate::core::models::Task;

/// A server-confirmed change to the cached task list.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    Replace(Vec<Task>),
    Insert(Task),
    Update(Task),
    Remove(String),
}

/// The dashboard's cached copy of the user's tasks, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    #[cfg(test)]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn apply(&mut self, mutation: TaskMutation) {
        match mutation {
            TaskMutation::Replace(tasks) => self.tasks = tasks,
            TaskMutation::Insert(task) => match self.position(&task.id) {
                Some(index) => self.tasks[index] = task,
                None => self.tasks.push(task),
            },
            TaskMutation::Update(task) => match self.position(&task.id) {
                Some(index) => self.tasks[index] = task,
                None => log::debug!("Ignoring update for task {} not in collection", task.id),
            },
            TaskMutation::Remove(task_id) => self.tasks.retain(|t| t.id != task_id),
        }
    }

    fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}

/// What to do with a finished full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadVerdict {
    Apply,
    /// A newer reload is in flight; its result supersedes this one.
    Superseded,
    /// A mutation landed after this reload was issued, so its snapshot may
    /// predate it. Fetch again.
    Refetch,
}

/// Orders full reloads against the individual mutations applied meanwhile.
///
/// Every issued reload and every applied mutation bumps the generation. A
/// reload result is only current if nothing happened since it was issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSequencer {
    generation: u64,
    latest_reload: u64,
}

impl ReloadSequencer {
    /// Ticket for a reload that is about to be sent.
    pub fn issue(&mut self) -> u64 {
        self.generation += 1;
        self.latest_reload = self.generation;
        self.generation
    }

    pub fn mutated(&mut self) {
        self.generation += 1;
    }

    pub fn verdict(&self, ticket: u64) -> ReloadVerdict {
        if ticket == self.generation {
            ReloadVerdict::Apply
        } else if ticket < self.latest_reload {
            ReloadVerdict::Superseded
        } else {
            ReloadVerdict::Refetch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: None,
            completed,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn insert_appends_or_replaces_in_place() {
        let mut tasks = TaskCollection::new(vec![task("1", false), task("2", false)]);
        tasks.apply(TaskMutation::Insert(task("3", false)));
        tasks.apply(TaskMutation::Insert(task("1", true)));

        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(tasks.completed_count(), 1);
    }

    #[test]
    fn update_of_unknown_task_is_ignored() {
        let mut tasks = TaskCollection::new(vec![task("1", false)]);
        tasks.apply(TaskMutation::Update(task("9", true)));
        assert_eq!(tasks.len(), 1);
        assert!(tasks.get("9").is_none());
    }

    #[test]
    fn remove_and_replace() {
        let mut tasks = TaskCollection::new(vec![task("1", false), task("2", false)]);
        tasks.apply(TaskMutation::Remove("1".to_string()));
        assert_eq!(tasks.len(), 1);

        tasks.apply(TaskMutation::Replace(Vec::new()));
        assert!(tasks.is_empty());
    }

    #[test]
    fn reload_is_current_when_nothing_happened_meanwhile() {
        let mut sequencer = ReloadSequencer::default();
        let ticket = sequencer.issue();
        assert_eq!(sequencer.verdict(ticket), ReloadVerdict::Apply);
    }

    #[test]
    fn mutation_after_reload_was_issued_forces_refetch() {
        let mut sequencer = ReloadSequencer::default();
        let ticket = sequencer.issue();
        // A toggle lands while the reload is in flight
        sequencer.mutated();

        assert_eq!(sequencer.verdict(ticket), ReloadVerdict::Refetch);
    }

    #[test]
    fn older_of_two_overlapping_reloads_is_superseded() {
        let mut sequencer = ReloadSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert_eq!(sequencer.verdict(first), ReloadVerdict::Superseded);
        assert_eq!(sequencer.verdict(second), ReloadVerdict::Apply);
    }

    #[test]
    fn mutation_after_overlapping_reloads_refetches_only_the_latest() {
        let mut sequencer = ReloadSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        sequencer.mutated();

        assert_eq!(sequencer.verdict(first), ReloadVerdict::Superseded);
        assert_eq!(sequencer.verdict(second), ReloadVerdict::Refetch);
    }
}
