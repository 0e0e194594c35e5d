use std::fmt;

/// A chain-tip value a Hesiod name can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HesiodField {
    Hash,
    Height,
    Time,
}

impl HesiodField {
    /// Order of the records in a combined `chain.hnsd.` answer.
    pub const ALL: [HesiodField; 3] = [HesiodField::Hash, HesiodField::Height, HesiodField::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            HesiodField::Hash => "hash",
            HesiodField::Height => "height",
            HesiodField::Time => "time",
        }
    }
}

impl fmt::Display for HesiodField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching a question against the reserved names.
///
/// The requested fields are a static slice so the answer order is fixed at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Match(&'static [HesiodField]),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match(_))
    }

    pub fn requested(&self) -> &'static [HesiodField] {
        match self {
            MatchResult::NoMatch => &[],
            MatchResult::Match(fields) => fields,
        }
    }
}
