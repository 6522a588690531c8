//! Read access to the records columns display.

use std::collections::{BTreeMap, HashMap};

/// A record whose attributes columns can read.
///
/// Columns only ever call [`Record::get`] with their own name and never write
/// back. Missing attributes read as the empty string.
///
/// # Example
///
/// ```
/// use columnar::Record;
///
/// struct Note {
///     text: String,
/// }
///
/// impl Record for Note {
///     fn get(&self, attribute: &str) -> String {
///         match attribute {
///             "description" => self.text.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the named attribute as a string, empty when absent.
    fn get(&self, attribute: &str) -> String;
}

impl Record for HashMap<String, String> {
    fn get(&self, attribute: &str) -> String {
        HashMap::get(self, attribute).cloned().unwrap_or_default()
    }
}

impl Record for BTreeMap<String, String> {
    fn get(&self, attribute: &str) -> String {
        BTreeMap::get(self, attribute).cloned().unwrap_or_default()
    }
}

/// A simple owned record of string attributes.
///
/// ```
/// use columnar::{Record, Task};
///
/// let task = Task::new().with("fg", "red").with("project", "home");
/// assert_eq!(task.get("fg"), "red");
/// assert_eq!(task.get("due"), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Task {
    attributes: BTreeMap<String, String>,
}

impl Task {
    pub fn new() -> Self {
        Task::default()
    }

    /// Sets an attribute, builder style.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn remove(&mut self, attribute: &str) -> Option<String> {
        self.attributes.remove(attribute)
    }
}

impl Record for Task {
    fn get(&self, attribute: &str) -> String {
        self.attributes.get(attribute).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Task {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Task {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_missing_attribute_is_empty() {
        assert_eq!(Task::new().get("anything"), "");
    }

    #[test]
    fn task_set_and_remove() {
        let mut task = Task::new();
        task.set("tags", "home,work");
        assert_eq!(task.get("tags"), "home,work");
        assert_eq!(task.remove("tags").as_deref(), Some("home,work"));
        assert_eq!(task.get("tags"), "");
    }

    #[test]
    fn task_from_pairs() {
        let task: Task = [("project", "home"), ("priority", "H")].into_iter().collect();
        assert_eq!(task.get("priority"), "H");
    }

    #[test]
    fn maps_are_records() {
        let mut map = HashMap::new();
        map.insert("fg".to_string(), "red".to_string());
        assert_eq!(Record::get(&map, "fg"), "red");
        assert_eq!(Record::get(&map, "bg"), "");

        let tree: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(Record::get(&tree, "fg"), "");
    }
}
