use serde::{Deserialize, Serialize};

/// Reported with every successful classification. The upstream reply carries
/// no usable certainty signal, so the score is a constant.
pub const CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Portrait,
    Car,
    Apartment,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Portrait => "portrait",
            Category::Car => "car",
            Category::Apartment => "apartment",
            Category::Unknown => "unknown",
        }
    }
}

// Checked in order; a reply mentioning several keywords resolves to the
// first entry that matches, not the most prominent one in the text.
const KEYWORD_PRIORITY: [(&str, Category); 3] = [
    ("portrait", Category::Portrait),
    ("car", Category::Car),
    ("apartment", Category::Apartment),
];

pub fn classify(reply: &str) -> Category {
    let reply = reply.trim().to_lowercase();
    for (keyword, category) in KEYWORD_PRIORITY {
        if reply.contains(keyword) {
            return category;
        }
    }
    Category::Unknown
}
