use chrono::NaiveTime;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use timetable_tool::{Day, FileStore, FolderStatus, Task, User, UserList, encode_timetable};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  users                              List known users\n  adduser <name>                     Add a user and create their data file\n  add <user> <day> <start> <end> <type> <desc...>\n                                     Add a task (times as HH:MM, day as e.g. Monday)\n  show <user>                        Print a user's timetable\n  save <user>                        Write a user's timetable to disk\n  quit|exit                          Exit"
    );
}

fn print_timetable(user: &User) {
    for line in encode_timetable(user.name(), user.timetable()) {
        println!("{line}");
    }
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let store = FileStore::new(data_dir);

    match store.ensure_data_dir() {
        FolderStatus::Created => println!("Folder created successfully."),
        FolderStatus::AlreadyExists => println!("Folder already exists."),
        FolderStatus::Failed => println!("Failed to create folder."),
    }

    let mut users = UserList::new();
    for user in store.discover_users() {
        users.add_user(user);
    }
    if users.is_empty() {
        println!("No existing users found.");
    } else {
        println!("Loaded {} user(s) from {}.", users.len(), store.data_dir().display());
    }

    println!("Timetable Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "users" => {
                if users.is_empty() {
                    println!("No users.");
                } else {
                    for user in users.users() {
                        println!("{} ({} task(s))", user.name(), user.timetable().task_count());
                    }
                }
            }
            "adduser" => match parts.next() {
                Some(name) if name.contains('.') => {
                    println!("Usernames must not contain '.'");
                }
                Some(name) => {
                    if users.find(name).is_some() {
                        println!("User '{name}' already exists.");
                        continue;
                    }
                    let user = User::new(name);
                    match store.create_user_file(&user) {
                        Ok(()) => {
                            println!("User '{name}' added.");
                            users.add_user(user);
                        }
                        Err(e) => println!("Something went wrong: {e}"),
                    }
                }
                None => println!("Usage: adduser <name>"),
            },
            "add" => {
                let name_s = parts.next();
                let day_s = parts.next();
                let start_s = parts.next();
                let end_s = parts.next();
                let type_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (name_s, day_s, start_s, end_s, type_s, !rest.is_empty()) {
                    (Some(name), Some(day_s), Some(start_s), Some(end_s), Some(task_type), true) => {
                        let Some(day) = Day::from_str(day_s) else {
                            println!("Invalid day (Monday..Sunday)");
                            continue;
                        };
                        let start = match NaiveTime::parse_from_str(start_s, "%H:%M") {
                            Ok(t) => t,
                            Err(_) => {
                                println!("Invalid start time (HH:MM)");
                                continue;
                            }
                        };
                        let end = match NaiveTime::parse_from_str(end_s, "%H:%M") {
                            Ok(t) => t,
                            Err(_) => {
                                println!("Invalid end time (HH:MM)");
                                continue;
                            }
                        };
                        match users.find_mut(name) {
                            Some(user) => {
                                let description = rest.join(" ");
                                user.timetable_mut()
                                    .add_task(day, Task::new(description, day, start, end, task_type));
                                println!("Task added to {day} for '{name}'.");
                            }
                            None => println!("Unknown user '{name}'. Use 'adduser' first."),
                        }
                    }
                    _ => println!("Usage: add <user> <day> <start> <end> <type> <desc...>"),
                }
            }
            "show" => match parts.next() {
                Some(name) => match users.find(name) {
                    Some(user) => print_timetable(user),
                    None => println!("Unknown user '{name}'."),
                },
                None => println!("Usage: show <user>"),
            },
            "save" => match parts.next() {
                Some(name) => match users.find(name) {
                    Some(user) => match store.save(user) {
                        Ok(()) => println!(
                            "Timetable has been written to {}",
                            store.user_file_path(name).display()
                        ),
                        Err(e) => println!("Error saving timetable: {e}"),
                    },
                    None => println!("Unknown user '{name}'."),
                },
                None => println!("Usage: save <user>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
