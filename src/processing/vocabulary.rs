//! Fixed vocabularies used by the scorer
//!
//! Every list is lowercase, ordered, and never mutated. Lookups report the
//! terms of a list that occur anywhere in a text as a plain substring, in the
//! order the list declares them.

use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

pub const TECHNICAL_SKILL_TERMS: &[&str] = &[
    "javascript", "python", "java", "react", "node.js", "typescript", "html", "css",
    "sql", "mongodb", "postgresql", "git", "docker", "kubernetes", "aws", "azure",
    "machine learning", "data analysis", "artificial intelligence", "angular", "vue.js",
    "php", "ruby", "go", "rust", "c++", "c#", ".net", "spring", "django", "flask",
    "express", "graphql", "rest api", "microservices", "devops", "ci/cd", "jenkins",
    "terraform", "linux", "unix", "bash", "powershell", "agile", "scrum", "jira",
];

pub const SOFT_SKILL_TERMS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem solving", "analytical thinking",
    "project management", "time management", "adaptability", "creativity", "collaboration",
    "critical thinking", "decision making", "mentoring", "strategic thinking",
    "customer service", "presentation skills", "negotiation", "conflict resolution",
];

pub const IMPORTANT_KEYWORD_TERMS: &[&str] = &[
    "experience", "bachelor", "master", "degree", "certification", "years",
    "senior", "junior", "lead", "manager", "architect", "developer", "engineer",
    "analyst", "consultant", "specialist", "coordinator", "director", "startup",
    "enterprise", "remote", "hybrid", "full-time", "part-time", "contract",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "university", "college",
];

pub const ROLE_TERMS: &[&str] = &[
    "developer", "engineer", "manager", "analyst", "designer", "architect", "consultant",
];

pub const INDUSTRY_TERMS: &[&str] = &[
    "tech", "technology", "software", "finance", "healthcare", "education", "retail",
];

/// Skills whose presence among the matched skills signals leadership.
pub const LEADERSHIP_TERMS: &[&str] = &["leadership", "management", "lead"];

pub static TECHNICAL_SKILLS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("technical skills", TECHNICAL_SKILL_TERMS));

pub static SOFT_SKILLS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("soft skills", SOFT_SKILL_TERMS));

pub static IMPORTANT_KEYWORDS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("important keywords", IMPORTANT_KEYWORD_TERMS));

pub static EDUCATION_KEYWORDS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("education keywords", EDUCATION_TERMS));

pub static ROLE_KEYWORDS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("role keywords", ROLE_TERMS));

pub static INDUSTRY_KEYWORDS: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new("industry keywords", INDUSTRY_TERMS));

/// An ordered term list paired with a compiled multi-pattern matcher
pub struct Vocabulary {
    name: &'static str,
    terms: &'static [&'static str],
    matcher: AhoCorasick,
}

impl Vocabulary {
    /// Build a vocabulary over a static term list.
    ///
    /// Uses the standard match kind so overlapping search can report every
    /// term, including terms nested inside longer ones ("java" in "javascript").
    pub fn new(name: &'static str, terms: &'static [&'static str]) -> Self {
        let matcher = AhoCorasick::new(terms)
            .expect("Vocabulary terms are static and always compile");

        Self { name, terms, matcher }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn terms(&self) -> &'static [&'static str] {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms occurring in `text`, in declared order.
    ///
    /// `text` is expected to be lowercased already.
    pub fn find_in(&self, text: &str) -> Vec<&'static str> {
        let present = self.presence(text);
        self.select(|i| present[i])
    }

    /// Terms occurring in both texts, in declared order.
    pub fn find_in_both(&self, first: &str, second: &str) -> Vec<&'static str> {
        let in_first = self.presence(first);
        let in_second = self.presence(second);
        self.select(|i| in_first[i] && in_second[i])
    }

    /// Whether at least one term occurs in both texts.
    pub fn any_in_both(&self, first: &str, second: &str) -> bool {
        let in_first = self.presence(first);
        let in_second = self.presence(second);
        in_first.iter().zip(&in_second).any(|(a, b)| *a && *b)
    }

    /// Number of distinct terms occurring in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.presence(text).into_iter().filter(|found| *found).count()
    }

    fn presence(&self, text: &str) -> Vec<bool> {
        let mut present = vec![false; self.terms.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            present[mat.pattern().as_usize()] = true;
        }
        present
    }

    fn select(&self, keep: impl Fn(usize) -> bool) -> Vec<&'static str> {
        self.terms
            .iter()
            .enumerate()
            .filter(|(i, _)| keep(*i))
            .map(|(_, term)| *term)
            .collect()
    }
}

impl std::fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("name", &self.name)
            .field("terms", &self.terms.len())
            .finish()
    }
}
