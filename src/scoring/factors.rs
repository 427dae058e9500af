use std::fmt;

/// Comparison applied to a numeric input when picking a bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    LessThan(f64),
    LessEqual(f64),
    GreaterThan(f64),
    GreaterEqual(f64),
    /// Catch-all for the last row of a table
    Otherwise,
}

impl Threshold {
    pub fn matches(&self, value: f64) -> bool {
        match self {
            Threshold::LessThan(n) => value < *n,
            Threshold::LessEqual(n) => value <= *n,
            Threshold::GreaterThan(n) => value > *n,
            Threshold::GreaterEqual(n) => value >= *n,
            Threshold::Otherwise => true,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::LessThan(n) => write!(f, "<{}", n),
            Threshold::LessEqual(n) => write!(f, "<={}", n),
            Threshold::GreaterThan(n) => write!(f, ">{}", n),
            Threshold::GreaterEqual(n) => write!(f, ">={}", n),
            Threshold::Otherwise => f.write_str("otherwise"),
        }
    }
}

/// A row of a bucket table: first row whose threshold matches wins.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub threshold: Threshold,
    pub points: f64,
}

pub const fn bucket(threshold: Threshold, points: f64) -> Bucket {
    Bucket { threshold, points }
}

/// Find the first matching bucket. Tables end with `Otherwise`, so a match is
/// expected; `None` only comes back for a table without a catch-all row.
pub fn match_bucket(buckets: &[Bucket], value: f64) -> Option<&Bucket> {
    buckets.iter().find(|b| b.threshold.matches(value))
}

/// A keyword and the points it contributes when present.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub text: &'static str,
    pub points: f64,
}

pub const fn keyword(text: &'static str, points: f64) -> Keyword {
    Keyword { text, points }
}

/// Keywords (already lower-case) that occur in `haystack` at least once,
/// in table order. Matching is case-insensitive substring presence: repeated
/// occurrences of one keyword count once, and keywords sharing substrings are
/// matched independently.
pub fn match_keywords<'a>(keywords: &'a [Keyword], haystack: &str) -> Vec<&'a Keyword> {
    let text = haystack.to_lowercase();
    keywords.iter().filter(|k| text.contains(k.text)).collect()
}
