//! Keyword density of the job description's most frequent words

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Number of job-description words reported.
pub const TOP_KEYWORDS: usize = 10;

/// Words must be longer than this many UTF-16 code units to be counted.
pub const MIN_WORD_CHARS: usize = 3;

/// Whitespace, plus the byte order mark, which some editors leave in text.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Length as browsers report it: astral-plane characters count twice.
fn word_length(word: &str) -> usize {
    word.encode_utf16().count()
}

/// Ordered word -> count mapping, most frequent job word first.
///
/// Serializes as a JSON object whose key order is the rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDensity {
    entries: Vec<(String, u32)>,
}

impl KeywordDensity {
    /// Count job-description words and report them against the resume.
    ///
    /// Words are whitespace-separated tokens of the lowercased job text, kept
    /// with any punctuation attached. A byte order mark separates words. The
    /// ten most frequent survive; ties keep the order in which words first
    /// appeared. Each word reports its job
    /// count when the lowercased resume contains it anywhere, 0 otherwise.
    pub fn calculate(resume: &str, job: &str) -> Self {
        let resume = resume.to_lowercase();
        let job = job.to_lowercase();

        let mut first_seen: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for word in job
            .split(is_separator)
            .filter(|word| word_length(word) > MIN_WORD_CHARS)
        {
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                first_seen.push(word);
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, u32)> = first_seen
            .into_iter()
            .map(|word| (word, counts[word]))
            .collect();
        // Stable: equal counts keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let entries = ranked
            .into_iter()
            .take(TOP_KEYWORDS)
            .map(|(word, count)| {
                let reported = if resume.contains(word) { count } else { 0 };
                (word.to_string(), reported)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| key == word)
            .map(|(_, count)| *count)
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KeywordDensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordDensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DensityVisitor;

        impl<'de> Visitor<'de> for DensityVisitor {
            type Value = KeywordDensity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of words to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((word, count)) = access.next_entry::<String, u32>()? {
                    entries.push((word, count));
                }
                Ok(KeywordDensity { entries })
            }
        }

        deserializer.deserialize_map(DensityVisitor)
    }
}
