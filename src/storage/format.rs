//! Fixed text layout for one user's weekly timetable.
//!
//! Encoder and decoder share the constants below, so a layout change on one
//! side cannot silently break the other. The format carries no version
//! marker and no escaping: descriptions or types containing the marker
//! substrings (e.g. " (type: ") will not round-trip.

use super::{StorageError, StorageResult};
use crate::task::{Day, Task};
use crate::timetable::Timetable;
use chrono::NaiveTime;

pub const HEADER_PREFIX: &str = "Username: ";
pub const NO_TASK_LINE: &str = "No task :)";

const OUTLINE_CORNER: char = '+';
const OUTLINE_PADDING: usize = 2;
const DAY_DELIMITER: char = '|';
const SEPARATOR_CHAR: char = '.';
const SEPARATOR_WIDTH: usize = 97;

const NUMBER_SEP: &str = ". ";
const TIME_RANGE_SEP: &str = " - ";
const DESCRIPTION_SEP: &str = ": ";
const TYPE_OPEN: &str = " (type: ";
const TYPE_CLOSE: char = ')';
const TIME_FORMAT: &str = "%H:%M";

/// Box outline framing a day header: width follows the day name.
fn outline_line(day: Day) -> String {
    let dashes = "-".repeat(day.as_str().len() + OUTLINE_PADDING);
    format!("{OUTLINE_CORNER}{dashes}{OUTLINE_CORNER}")
}

fn separator_line() -> String {
    SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}

fn task_line(number: usize, task: &Task) -> String {
    let start = task.start.format(TIME_FORMAT);
    let end = task.end.format(TIME_FORMAT);
    format!(
        "{number}{NUMBER_SEP}{start}{TIME_RANGE_SEP}{end}{DESCRIPTION_SEP}{}{TYPE_OPEN}{}{TYPE_CLOSE}",
        task.description, task.task_type
    )
}

/// Renders the full timetable of one user as the ordered sequence of lines
/// written to the user's file. Pure; any I/O failure belongs to the caller.
pub fn encode_timetable(username: &str, timetable: &Timetable) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + 7 * 6 + timetable.task_count());
    lines.push(format!("{HEADER_PREFIX}{username}"));
    for (day, tasks) in timetable.weekly_tasks() {
        let outline = outline_line(day);
        lines.push(outline.clone());
        lines.push(format!("{DAY_DELIMITER} {day} {DAY_DELIMITER}"));
        lines.push(outline);
        if tasks.is_empty() {
            lines.push(NO_TASK_LINE.to_string());
        } else {
            for (idx, task) in tasks.iter().enumerate() {
                lines.push(task_line(idx + 1, task));
            }
        }
        lines.push(separator_line());
        lines.push(String::new());
    }
    lines
}

fn parse_time(input: &str) -> StorageResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|e| StorageError::InvalidData(format!("invalid time '{input}': {e}")))
}

fn parse_task_line(line: &str, day: Day) -> StorageResult<Task> {
    let malformed = || StorageError::InvalidData(format!("malformed task line '{line}'"));

    let (number, rest) = line.split_once(NUMBER_SEP).ok_or_else(malformed)?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let (start, rest) = rest.split_once(TIME_RANGE_SEP).ok_or_else(malformed)?;
    let (end, rest) = rest.split_once(DESCRIPTION_SEP).ok_or_else(malformed)?;
    let (description, rest) = rest.split_once(TYPE_OPEN).ok_or_else(malformed)?;
    let task_type = rest.strip_suffix(TYPE_CLOSE).ok_or_else(malformed)?;

    Ok(Task::new(
        description.trim(),
        day,
        parse_time(start)?,
        parse_time(end)?,
        task_type,
    ))
}

/// Line-by-line decoder for the layout produced by [`encode_timetable`].
///
/// Formatting lines (header, outlines, separators, blanks, the empty-day
/// marker) are skipped; a `| Day |` header switches the current-day context;
/// every other line must be a task line and is appended to that day.
#[derive(Debug, Default)]
pub struct TimetableDecoder {
    current_day: Option<Day>,
}

impl TimetableDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str, timetable: &mut Timetable) -> StorageResult<()> {
        if line.is_empty()
            || line.starts_with(HEADER_PREFIX)
            || line.starts_with(OUTLINE_CORNER)
            || line.starts_with(SEPARATOR_CHAR)
            || line == NO_TASK_LINE
        {
            return Ok(());
        }
        if line.starts_with(DAY_DELIMITER) {
            let name = line.trim_matches(DAY_DELIMITER).trim();
            let day = Day::from_str(name)
                .ok_or_else(|| StorageError::InvalidData(format!("unknown day name '{name}'")))?;
            self.current_day = Some(day);
            return Ok(());
        }

        let day = self.current_day.ok_or_else(|| {
            StorageError::InvalidData(format!("task line outside any day block: '{line}'"))
        })?;
        let task = parse_task_line(line, day)?;
        timetable.add_task(day, task);
        Ok(())
    }
}

/// Decodes a full file's worth of lines into a fresh timetable.
pub fn decode_timetable<'a, I>(lines: I) -> StorageResult<Timetable>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut timetable = Timetable::new();
    let mut decoder = TimetableDecoder::new();
    for line in lines {
        decoder.feed(line, &mut timetable)?;
    }
    Ok(timetable)
}
