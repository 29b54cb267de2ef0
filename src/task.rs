use chrono::NaiveTime;
use std::fmt;

/// Day of the week, in calendar order Monday..Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn from_str(name: &str) -> Option<Day> {
        match name {
            "Monday" => Some(Day::Monday),
            "Tuesday" => Some(Day::Tuesday),
            "Wednesday" => Some(Day::Wednesday),
            "Thursday" => Some(Day::Thursday),
            "Friday" => Some(Day::Friday),
            "Saturday" => Some(Day::Saturday),
            "Sunday" => Some(Day::Sunday),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled activity. Built once, never mutated by the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub description: String,
    pub day: Day,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub task_type: String,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        day: Day,
        start: NaiveTime,
        end: NaiveTime,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            day,
            start,
            end,
            task_type: task_type.into(),
        }
    }
}
