//! Keyword dictionary and the lookup structures derived from it
//!
//! The dictionary is an ordered list of [`KeywordMapping`]s pairing each C
//! keyword (the *origin* vocabulary) with its C🥖 spelling (the *target*
//! vocabulary). From it the [`Dictionary`] derives:
//!
//! - two [`KeywordSet`]s, one per vocabulary, used by the scanner to tell
//!   keywords from identifiers
//! - two [`TranslationTable`]s, origin → target and its mirror image
//!
//! Everything here is immutable once built. The built-in dictionary is
//! constructed on first use and shared for the rest of the process.

mod table;

pub use table::KEYWORDS;

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::OnceLock;

/// Keyword category, used for listing and documentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Type,
    ControlFlow,
    Storage,
    Operator,
    Qualifier,
    Constant,
    Other,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 7] = [
        KeywordCategory::Type,
        KeywordCategory::ControlFlow,
        KeywordCategory::Storage,
        KeywordCategory::Operator,
        KeywordCategory::Qualifier,
        KeywordCategory::Constant,
        KeywordCategory::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeywordCategory::Type => "type",
            KeywordCategory::ControlFlow => "control",
            KeywordCategory::Storage => "storage",
            KeywordCategory::Operator => "operator",
            KeywordCategory::Qualifier => "qualifier",
            KeywordCategory::Constant => "constant",
            KeywordCategory::Other => "other",
        }
    }

    /// Parse a category from its short name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == lower)
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMapping {
    /// C spelling
    pub origin: &'static str,
    /// C🥖 spelling
    pub target: &'static str,
    pub category: KeywordCategory,
    pub description: Option<&'static str>,
}

impl KeywordMapping {
    /// Returns true when both vocabularies spell this keyword the same way.
    pub fn is_self_mapped(&self) -> bool {
        self.origin == self.target
    }
}

/// Which of the two keyword vocabularies a word or text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Plain C keywords
    Origin,
    /// C🥖 keywords
    Target,
}

impl Vocabulary {
    pub fn other(self) -> Self {
        match self {
            Vocabulary::Origin => Vocabulary::Target,
            Vocabulary::Target => Vocabulary::Origin,
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocabulary::Origin => f.write_str("C"),
            Vocabulary::Target => f.write_str("C🥖"),
        }
    }
}

/// Direction of a conversion.
///
/// The scanner must always be fed the keyword set of the *input* vocabulary
/// ([`Direction::input_vocabulary`]). Scanning with the other set does not
/// fail: keywords simply come out as identifiers and are left untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// C → C🥖 ("translate")
    ToTarget,
    /// C🥖 → C ("compile")
    ToOrigin,
}

impl Direction {
    pub fn input_vocabulary(self) -> Vocabulary {
        match self {
            Direction::ToTarget => Vocabulary::Origin,
            Direction::ToOrigin => Vocabulary::Target,
        }
    }

    pub fn output_vocabulary(self) -> Vocabulary {
        self.input_vocabulary().other()
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::ToTarget => Direction::ToOrigin,
            Direction::ToOrigin => Direction::ToTarget,
        }
    }

    /// Probe `table` with the dictionary's marker pairs to find out which way
    /// it translates.
    ///
    /// The first mapping whose two spellings differ decides: if the table maps
    /// its origin spelling to its target spelling the table goes to the
    /// target vocabulary, and the other way round for the mirror entry.
    /// Self-mapped keywords (`union`, `volatile`) carry no information and are
    /// skipped. Returns `None` when no marker is present in the table.
    pub fn infer(table: &TranslationTable, dictionary: &Dictionary) -> Option<Direction> {
        dictionary
            .mappings()
            .iter()
            .filter(|m| !m.is_self_mapped())
            .find_map(|m| {
                if table.get(m.origin) == Some(m.target) {
                    Some(Direction::ToTarget)
                } else if table.get(m.target) == Some(m.origin) {
                    Some(Direction::ToOrigin)
                } else {
                    None
                }
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.input_vocabulary(),
            self.output_vocabulary()
        )
    }
}

/// Membership set of the keywords of one vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    vocabulary: Vocabulary,
    words: FxHashSet<&'static str>,
}

impl KeywordSet {
    pub fn new(vocabulary: Vocabulary, words: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            vocabulary,
            words: words.into_iter().collect(),
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Directional word → replacement map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: FxHashMap<&'static str, &'static str>,
}

impl TranslationTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&'static str> {
        self.entries.get(word).copied()
    }

    pub fn contains_key(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The mirror table: every value becomes a key mapping back to its key.
    pub fn inverse(&self) -> TranslationTable {
        Self::from_pairs(self.entries.iter().map(|(&k, &v)| (v, k)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }
}

/// Dictionary validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The mapping list is empty
    Empty,

    /// Two mappings share the same C spelling
    DuplicateOrigin { word: &'static str },

    /// Two mappings share the same C🥖 spelling
    DuplicateTarget { word: &'static str },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Empty => write!(f, "Keyword dictionary is empty"),
            DictionaryError::DuplicateOrigin { word } => {
                write!(f, "Keyword '{}' is mapped more than once", word)
            }
            DictionaryError::DuplicateTarget { word } => {
                write!(
                    f,
                    "Translated keyword '{}' is used by more than one mapping",
                    word
                )
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// A validated, bijective keyword dictionary with its derived tables.
#[derive(Debug, Clone)]
pub struct Dictionary {
    mappings: Vec<KeywordMapping>,
    forward: TranslationTable,
    reverse: TranslationTable,
    origin_words: KeywordSet,
    target_words: KeywordSet,
}

impl Dictionary {
    /// Build a dictionary, rejecting lists that do not pair the two
    /// vocabularies one-to-one.
    pub fn from_mappings(mappings: &[KeywordMapping]) -> Result<Self, DictionaryError> {
        if mappings.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut origins = FxHashSet::default();
        let mut targets = FxHashSet::default();
        for mapping in mappings {
            if !origins.insert(mapping.origin) {
                return Err(DictionaryError::DuplicateOrigin {
                    word: mapping.origin,
                });
            }
            if !targets.insert(mapping.target) {
                return Err(DictionaryError::DuplicateTarget {
                    word: mapping.target,
                });
            }
        }

        Ok(Self::build(mappings))
    }

    fn build(mappings: &[KeywordMapping]) -> Self {
        let forward = TranslationTable::from_pairs(mappings.iter().map(|m| (m.origin, m.target)));
        let reverse = forward.inverse();

        Self {
            mappings: mappings.to_vec(),
            origin_words: KeywordSet::new(Vocabulary::Origin, mappings.iter().map(|m| m.origin)),
            target_words: KeywordSet::new(Vocabulary::Target, mappings.iter().map(|m| m.target)),
            forward,
            reverse,
        }
    }

    pub fn mappings(&self) -> &[KeywordMapping] {
        &self.mappings
    }

    /// Table used to convert in `direction`.
    pub fn table(&self, direction: Direction) -> &TranslationTable {
        match direction {
            Direction::ToTarget => &self.forward,
            Direction::ToOrigin => &self.reverse,
        }
    }

    pub fn keywords(&self, vocabulary: Vocabulary) -> &KeywordSet {
        match vocabulary {
            Vocabulary::Origin => &self.origin_words,
            Vocabulary::Target => &self.target_words,
        }
    }

    pub fn by_category(&self, category: KeywordCategory) -> impl Iterator<Item = &KeywordMapping> {
        self.mappings.iter().filter(move |m| m.category == category)
    }

    pub fn is_origin_keyword(&self, word: &str) -> bool {
        self.origin_words.contains(word)
    }

    pub fn is_target_keyword(&self, word: &str) -> bool {
        self.target_words.contains(word)
    }

    /// Find the mapping for a word spelled in either vocabulary.
    pub fn lookup(&self, word: &str) -> Option<&KeywordMapping> {
        self.mappings
            .iter()
            .find(|m| m.origin == word || m.target == word)
    }
}

static BUILTIN: OnceLock<Dictionary> = OnceLock::new();

/// The built-in C ↔ C🥖 dictionary, built from [`KEYWORDS`] on first use.
pub fn builtin() -> &'static Dictionary {
    BUILTIN.get_or_init(|| Dictionary::build(KEYWORDS))
}
