//! Roster fixture and the adults filter.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};
use serde::Serialize;
use weft_core::Component;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub age: u32,
}

impl Member {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// The fixture list; stands in for data fetched from an API
pub fn sample_roster() -> Vec<Member> {
    vec![
        Member::new("Arun", 22),
        Member::new("Suresh", 18),
        Member::new("Ramesh", 15),
        Member::new("Dinesh", 55),
        Member::new("Aravind", 44),
        Member::new("Vijay", 23),
        Member::new("Santhosh", 33),
    ]
}

/// Members aged 18 or over, in their original order
pub fn adults(members: &[Member]) -> Vec<Member> {
    members
        .iter()
        .filter(|member| member.age >= 18)
        .cloned()
        .collect()
}

/// Renders the adult members of the sample roster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterPanel;

impl Component for RosterPanel {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let items: Vec<ListItem> = adults(&sample_roster())
            .into_iter()
            .map(|member| ListItem::new(format!("{} ({})", member.name, member.age)))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Adults"));
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GLOBALS_LOCK, Harness};

    #[test]
    fn test_adults_keeps_exactly_the_of_age_members() {
        let filtered = adults(&sample_roster());
        assert_eq!(filtered.len(), 6);
        assert!(filtered.iter().all(|member| member.age >= 18));
        assert!(!filtered.iter().any(|member| member.name == "Ramesh"));
    }

    #[test]
    fn test_adults_preserves_order() {
        let filtered = adults(&sample_roster());
        let names: Vec<&str> = filtered.iter().map(|member| member.name.as_str()).collect();
        assert_eq!(
            names,
            ["Arun", "Suresh", "Dinesh", "Aravind", "Vijay", "Santhosh"]
        );
    }

    // The filter output is fixture data; a snapshot catches accidental edits
    // to either the fixture or the filter.
    #[test]
    fn test_adults_snapshot() {
        insta::assert_debug_snapshot!(adults(&sample_roster()), @r#"
        [
            Member {
                name: "Arun",
                age: 22,
            },
            Member {
                name: "Suresh",
                age: 18,
            },
            Member {
                name: "Dinesh",
                age: 55,
            },
            Member {
                name: "Aravind",
                age: 44,
            },
            Member {
                name: "Vijay",
                age: 23,
            },
            Member {
                name: "Santhosh",
                age: 33,
            },
        ]
        "#);
    }

    #[test]
    fn test_panel_lists_only_adults() {
        let _lock = GLOBALS_LOCK.lock();
        let mut harness = Harness::new(30, 10);
        harness.draw(&RosterPanel);

        let text = harness.text();
        assert!(text.contains("Arun (22)"));
        assert!(text.contains("Santhosh (33)"));
        assert!(!text.contains("Ramesh"));
    }
}
