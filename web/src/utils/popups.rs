use std::collections::HashMap;

/// Open/closed flag per point of interest. Entries are independent; opening
/// one never touches another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupVisibility {
    open: HashMap<String, bool>,
}

impl PopupVisibility {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.open.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Records the state reported by the map widget. Returns whether it changed.
    pub fn set(&mut self, id: &str, open: bool) -> bool {
        let flag = self.open.entry(id.to_string()).or_insert(false);
        let changed = *flag != open;
        *flag = open;
        changed
    }

    pub fn open_count(&self) -> usize {
        self.open.values().filter(|open| **open).count()
    }
}
