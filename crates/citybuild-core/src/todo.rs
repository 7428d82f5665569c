//! Today's todo list shown in the bottom sheet.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub tag: String,
    pub is_completed: bool,
    /// Original position, used to keep a stable order.
    pub order: u32,
}

impl TodoItem {
    fn new(id: u32, text: &str, tag: &str, is_completed: bool) -> Self {
        Self {
            id,
            text: text.to_string(),
            tag: tag.to_string(),
            is_completed,
            order: id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Demo list shown until the host provides real data.
    pub fn sample() -> Self {
        Self::new(vec![
            TodoItem::new(1, "Read an English newspaper", "English", false),
            TodoItem::new(2, "Practice interview answers", "Interview prep", false),
            TodoItem::new(3, "Research the role", "Job research", false),
            TodoItem::new(4, "Draft the weekly report", "Work", true),
        ])
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Flips completion of `id`. Returns false when no such item exists.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_completed = !item.is_completed;
                true
            }
            None => false,
        }
    }

    /// Open items first, each group in original order.
    pub fn sorted(&self) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self.items.iter().collect();
        items.sort_by_key(|item| (item.is_completed, item.order));
        items
    }

    /// `(completed, total)`.
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.items.iter().filter(|item| item.is_completed).count();
        (completed, self.items.len())
    }
}

/// Header date, e.g. `10/19 Mon`.
pub fn format_header_date(date: NaiveDate) -> String {
    format!("{}/{} {}", date.month(), date.day(), weekday_short(date.weekday()))
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_puts_completed_last() {
        let list = TodoList::sample();
        let ids: Vec<u32> = list.sorted().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let mut list = list;
        assert!(list.toggle(1));
        let ids: Vec<u32> = list.sorted().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_toggle_and_progress() {
        let mut list = TodoList::sample();
        assert_eq!(list.progress(), (1, 4));

        list.toggle(2);
        assert_eq!(list.progress(), (2, 4));
        list.toggle(4);
        assert_eq!(list.progress(), (1, 4));

        assert!(!list.toggle(99));
        assert!(list.get(4).is_some_and(|item| !item.is_completed));
    }

    #[test]
    fn test_header_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_header_date(date), "10/19 Mon");
    }
}
