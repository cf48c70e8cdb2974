// MARKER: sample crate root
use std::collections::HashMap;

pub struct Registry {
    entries: HashMap<String, u32>,
}

impl Registry {
    pub fn insert(&mut self, key: String, value: u32) {
        self.entries.insert(key, value);
    }
}

enum State {
    Idle,
    Busy,
}

trait Handler {
    fn handle(&self);
}

fn main() {
    let _ = State::Idle;
}
