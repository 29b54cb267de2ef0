use chrono::NaiveTime;
use timetable_tool::{
    Day, StorageError, Task, Timetable, TimetableDecoder, decode_timetable, encode_timetable,
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sample_timetable() -> Timetable {
    let mut timetable = Timetable::new();
    timetable.add_task(
        Day::Monday,
        Task::new("CS lecture", Day::Monday, t(10, 0), t(12, 0), "class"),
    );
    timetable.add_task(
        Day::Monday,
        Task::new("Gym", Day::Monday, t(18, 30), t(19, 30), "exercise"),
    );
    timetable.add_task(
        Day::Wednesday,
        Task::new("Project meeting", Day::Wednesday, t(14, 0), t(15, 0), "meeting"),
    );
    timetable
}

#[test]
fn encode_decode_round_trip_preserves_timetable() {
    let timetable = sample_timetable();
    let lines = encode_timetable("bob", &timetable);
    let decoded = decode_timetable(lines.iter().map(String::as_str)).unwrap();
    assert_eq!(decoded, timetable);
}

#[test]
fn monday_block_matches_expected_layout() {
    let mut timetable = Timetable::new();
    timetable.add_task(
        Day::Monday,
        Task::new("CS lecture", Day::Monday, t(10, 0), t(12, 0), "class"),
    );
    let lines = encode_timetable("bob", &timetable);

    assert_eq!(lines[0], "Username: bob");
    assert_eq!(lines[1], "+--------+");
    assert_eq!(lines[2], "| Monday |");
    assert_eq!(lines[3], "+--------+");
    assert_eq!(lines[4], "1. 10:00 - 12:00: CS lecture (type: class)");
    assert_eq!(lines[5], ".".repeat(97));
    assert_eq!(lines[6], "");

    let decoded = decode_timetable(lines.iter().map(String::as_str)).unwrap();
    assert_eq!(decoded.tasks_for(Day::Monday).len(), 1);
    assert_eq!(decoded.tasks_for(Day::Monday)[0].description, "CS lecture");
    assert_eq!(decoded.task_count(), 1);
}

#[test]
fn outline_width_follows_day_name_length() {
    let lines = encode_timetable("bob", &Timetable::new());
    for day in Day::ALL {
        let header = format!("| {day} |");
        let pos = lines.iter().position(|l| *l == header).unwrap();
        let expected = format!("+{}+", "-".repeat(day.as_str().len() + 2));
        assert_eq!(lines[pos - 1], expected, "outline above {day}");
        assert_eq!(lines[pos + 1], expected, "outline below {day}");
    }
}

#[test]
fn empty_day_renders_no_task_marker() {
    let lines = encode_timetable("bob", &Timetable::new());
    let count = lines.iter().filter(|l| *l == "No task :)").count();
    assert_eq!(count, 7);

    let decoded = decode_timetable(lines.iter().map(String::as_str)).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn task_numbering_is_one_indexed_and_sequential() {
    let mut timetable = Timetable::new();
    // Past 9 tasks so two-digit numbering is exercised too.
    for i in 0..12 {
        timetable.add_task(
            Day::Friday,
            Task::new(format!("Task {i}"), Day::Friday, t(8, 0), t(9, 0), "misc"),
        );
    }
    let lines = encode_timetable("bob", &timetable);
    let task_lines: Vec<&String> = lines.iter().filter(|l| l.contains("(type:")).collect();
    assert_eq!(task_lines.len(), 12);
    for (idx, line) in task_lines.iter().enumerate() {
        assert!(
            line.starts_with(&format!("{}. ", idx + 1)),
            "line {idx}: {line}"
        );
    }

    let decoded = decode_timetable(lines.iter().map(String::as_str)).unwrap();
    assert_eq!(decoded.tasks_for(Day::Friday).len(), 12);
    assert_eq!(decoded.tasks_for(Day::Friday)[11].description, "Task 11");
}

#[test]
fn decoder_skips_formatting_lines() {
    let mut timetable = Timetable::new();
    let mut decoder = TimetableDecoder::new();
    let separator = ".".repeat(97);
    for line in [
        "Username: bob",
        "+--------+",
        "",
        "No task :)",
        separator.as_str(),
    ] {
        decoder.feed(line, &mut timetable).unwrap();
    }
    assert!(timetable.is_empty());
}

#[test]
fn decoder_accepts_legacy_fixed_width_outlines() {
    // Files written by the legacy tool used hard-coded outline widths that
    // did not track the day name; any leading-'+' line must still be skipped.
    let lines = [
        "Username: bob",
        "+---------+",
        "| Wednesday |",
        "+-------------+",
        "1. 14:00 - 15:00: Project meeting (type: meeting)",
        "+------+",
        "| Friday |",
        "+------+",
        "No task :)",
    ];
    let decoded = decode_timetable(lines).unwrap();
    assert_eq!(decoded.tasks_for(Day::Wednesday).len(), 1);
    assert!(decoded.tasks_for(Day::Friday).is_empty());
}

#[test]
fn unknown_day_name_is_invalid_data() {
    let result = decode_timetable(["| Moonday |"]);
    match result {
        Err(StorageError::InvalidData(msg)) => {
            assert!(msg.contains("unknown day name"), "unexpected message: {msg}")
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn malformed_task_line_is_invalid_data() {
    let result = decode_timetable(["| Monday |", "1. this line has no time range"]);
    match result {
        Err(StorageError::InvalidData(msg)) => {
            assert!(msg.contains("malformed task line"), "unexpected message: {msg}")
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn bad_time_in_task_line_is_invalid_data() {
    let result = decode_timetable(["| Monday |", "1. 25:99 - 12:00: Sleep (type: rest)"]);
    match result {
        Err(StorageError::InvalidData(msg)) => {
            assert!(msg.contains("invalid time"), "unexpected message: {msg}")
        }
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn task_line_outside_day_block_is_invalid_data() {
    let result = decode_timetable(["1. 10:00 - 12:00: CS lecture (type: class)"]);
    match result {
        Err(StorageError::InvalidData(msg)) => assert!(
            msg.contains("outside any day block"),
            "unexpected message: {msg}"
        ),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}
