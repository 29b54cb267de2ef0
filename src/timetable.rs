use crate::task::{Day, Task};

/// Weekly task lists, one per day. All 7 days are always present and
/// iterate in calendar order; within a day, tasks keep insertion order
/// (they are never re-sorted by time).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    days: [Vec<Task>; 7],
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, day: Day, task: Task) {
        self.days[day.index()].push(task);
    }

    pub fn tasks_for(&self, day: Day) -> &[Task] {
        &self.days[day.index()]
    }

    /// Iterates the week in calendar order Monday..Sunday.
    pub fn weekly_tasks(&self) -> impl Iterator<Item = (Day, &[Task])> {
        Day::ALL.iter().map(|&day| (day, self.tasks_for(day)))
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}
