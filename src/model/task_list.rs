use chrono::{DateTime, Local, NaiveDate};

use super::task::{Task, TaskId, TaskView};

/// Direction for the day navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    Prev,
    Next,
}

/// The task checklist: an insertion-ordered collection plus the view filter
/// and the day navigator cursor.
///
/// The date cursor is display-only. Tasks are never bucketed by day, so
/// moving the cursor does not change which tasks are visible.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    view: TaskView,
    current_date: NaiveDate,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new(Local::now().date_naive())
    }
}

impl TaskList {
    pub fn new(today: NaiveDate) -> Self {
        TaskList {
            tasks: Vec::new(),
            next_id: 1,
            view: TaskView::Pending,
            current_date: today,
        }
    }

    /// Append a task titled with the trimmed input. Blank input is ignored.
    pub fn add_task(&mut self, raw_title: &str) -> Option<TaskId> {
        self.add_task_at(raw_title, Local::now())
    }

    pub fn add_task_at(&mut self, raw_title: &str, created_at: DateTime<Local>) -> Option<TaskId> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, title.to_string(), created_at));
        tracing::debug!(%id, "task added");
        Some(id)
    }

    /// Flip completion. Returns false if no task has this id.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove and return the task with this id, if any.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(idx);
        tracing::debug!(%id, "task deleted");
        Some(removed)
    }

    pub fn set_view(&mut self, view: TaskView) {
        self.view = view;
    }

    pub fn view(&self) -> TaskView {
        self.view
    }

    /// Move the displayed day by one. Does not touch the tasks.
    pub fn navigate_date(&mut self, step: DateStep) {
        let moved = match step {
            DateStep::Prev => self.current_date.pred_opt(),
            DateStep::Next => self.current_date.succ_opt(),
        };
        if let Some(date) = moved {
            self.current_date = date;
        }
    }

    pub fn jump_to_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks shown by the active view, insertion order
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        let view = self.view;
        self.tasks.iter().filter(move |t| view.shows(t))
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
