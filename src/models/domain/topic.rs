use serde::Serialize;

/// Placeholder entry shown at the top of every topic picker.
pub const PLACEHOLDER_TOPIC: &str = "Select a topic";

pub const TOPICS: [&str; 12] = [
    "Atomic Structure",
    "Structure and Bonding",
    "Periodicity",
    "Ideal Gas Equation",
    "Stoichiometry",
    "Energetics",
    "Acid-Base Reactions",
    "Oxidation, reduction, and redox reactions",
    "Kinetics",
    "Chemical Reactions and Equilibria",
    "Organic Chemistry",
    "Health, Safety, and Good Practice in the Laboratory",
];

/// What the student picked from a topic list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopicSelection {
    Placeholder,
    Topic(String),
}

impl TopicSelection {
    /// Empty input counts as "nothing picked yet", same as the placeholder.
    pub fn from_selection(selection: &str) -> Self {
        let trimmed = selection.trim();
        if trimmed.is_empty() || is_placeholder(trimmed) {
            TopicSelection::Placeholder
        } else {
            TopicSelection::Topic(trimmed.to_string())
        }
    }

    pub fn topic(&self) -> Option<&str> {
        match self {
            TopicSelection::Placeholder => None,
            TopicSelection::Topic(topic) => Some(topic),
        }
    }
}

pub fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER_TOPIC
}

/// Exact match against the curriculum list.
pub fn is_curriculum_topic(value: &str) -> bool {
    TOPICS.contains(&value)
}

/// The picker contents: placeholder first, then the topics in order.
pub fn selection_options() -> Vec<&'static str> {
    std::iter::once(PLACEHOLDER_TOPIC)
        .chain(TOPICS.iter().copied())
        .collect()
}

#[derive(Clone, Debug, Serialize)]
pub struct TopicCatalog {
    pub placeholder: &'static str,
    pub topics: Vec<&'static str>,
    pub options: Vec<&'static str>,
}

impl TopicCatalog {
    pub fn new() -> Self {
        Self {
            placeholder: PLACEHOLDER_TOPIC,
            topics: TOPICS.to_vec(),
            options: selection_options(),
        }
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::new()
    }
}
