use crate::timetable::Timetable;

/// Owner of one weekly timetable. The name doubles as the file stem of the
/// user's data file, so it must not contain '.'.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    timetable: Timetable,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timetable: Timetable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn timetable_mut(&mut self) -> &mut Timetable {
        &mut self.timetable
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name() == name)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
