use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    pub static ref DEFAULT_VOCABULARY: Vocabulary = Vocabulary::default();
}

pub const KEYWORDS: &[&str] = &[
    // Data structures
    "list", "stack", "queue", "deque", "set", "map", "tree", "graph", "heap", "class", "struct",
    "interface", "enum",
    // Operations
    "push", "pop", "insert", "delete", "remove", "search", "sort", "reverse", "traverse", "clear",
    "new", "get", "from",
    // Data types
    "int", "float", "string", "char", "bool", "long", "short", "double", "unsigned", "signed",
    "void", "auto",
    // Access
    "public", "private", "protected",
    // Control flow
    "if", "else", "for", "while", "do", "switch", "case", "break", "continue", "return",
    "default", "goto",
    // Built-in functions
    "show", "take", "give", "stop", "call",
    // Literals
    "true", "false", "null",
];

pub const DIRECTIVES: &[&str] = &[
    "include", "define", "undef", "ifdef", "ifndef", "if", "elif", "else", "endif", "error",
    "pragma", "line", "def", "get",
];

pub const SYMBOLS: &[&str] = &[
    "<<=", ">>=", "...",
    "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=",
    "%=", "&=", "|=", "^=", "::",
    "+", "-", "*", "/", "%", "<", ">", "=", "!", "&", "|", "^", "~", "?", ":", ";", ",", ".",
    "(", ")", "[", "]", "{", "}",
];

/// The classification tables queried by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    directives: HashSet<String>,
    // Longest first, so the first match is the maximal munch.
    symbols: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary tables.
    ///
    /// Symbols are reordered longest-first (keeping the given order between
    /// symbols of equal length) and empty symbols are dropped.
    pub fn new<K, D, S>(keywords: K, directives: D, symbols: S) -> Vocabulary
    where
        K: IntoIterator,
        K::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .map(Into::into)
            .filter(|symbol: &String| !symbol.is_empty())
            .collect();
        symbols.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Vocabulary {
            keywords: keywords.into_iter().map(Into::into).collect(),
            directives: directives.into_iter().map(Into::into).collect(),
            symbols,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// `name` is the first word of a `#` line, without the `#`.
    pub fn is_directive(&self, name: &str) -> bool {
        self.directives.contains(name)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new(
            KEYWORDS.iter().copied(),
            DIRECTIVES.iter().copied(),
            SYMBOLS.iter().copied(),
        )
    }
}
