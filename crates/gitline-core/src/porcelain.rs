//! Parsing of `git status --porcelain --branch` output.
//!
//! Each input line is first tokenized into one of three shapes (branch
//! header, file entry, or skipped), then the shape's own grammar turns it
//! into structured data:
//!
//! ```text
//! ## main...origin/main [ahead 2, behind 1]    header
//! MM src/lib.rs                                 file entry
//! R  old.rs -> new.rs                           file entry (rename)
//! ```

use crate::status::{BranchHeader, FileCounts};

/// Prefix that marks the branch header line.
pub const HEADER_SENTINEL: &str = "##";

/// Separator between local branch and upstream in the header.
const UPSTREAM_SEPARATOR: &str = "...";

/// Header phrases announcing a branch with no commits yet.
const INITIAL_COMMIT_PHRASES: &[&str] = &["Initial commit on", "No commits yet on"];

/// Header phrase announcing a detached HEAD.
const DETACHED_PHRASE: &str = "no branch";

/// Separator between original and new path in rename/copy entries.
const RENAME_ARROW: &str = " -> ";

/// One tokenized line of porcelain output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `## ...` branch header.
    Header(BranchHeader),
    /// `XY path` file entry.
    File(FileEntry<'a>),
    /// Empty or too short to carry a file entry.
    Skipped,
}

/// Classify a single line by shape and parse it with that shape's grammar.
#[must_use]
pub fn tokenize(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(HEADER_SENTINEL) {
        return Line::Header(parse_header(rest));
    }

    FileEntry::parse(line).map_or(Line::Skipped, Line::File)
}

/// Parse the text following the `##` sentinel into a [`BranchHeader`].
///
/// Shapes are tried in priority order:
/// 1. `Initial commit on X` / `No commits yet on X` - branch is `X`
/// 2. anything containing `no branch` - detached, branch left empty
/// 3. no `...` separator - the whole remainder is the branch
/// 4. `X...Y [ahead N, behind M]` - local, upstream and divergence
#[must_use]
pub fn parse_header(rest: &str) -> BranchHeader {
    let rest = rest.trim();

    for phrase in INITIAL_COMMIT_PHRASES {
        if let Some((_, branch)) = rest.split_once(phrase) {
            return BranchHeader {
                branch: branch.trim().to_string(),
                ..BranchHeader::default()
            };
        }
    }

    if rest.contains(DETACHED_PHRASE) {
        return BranchHeader {
            detached: true,
            ..BranchHeader::default()
        };
    }

    let Some((local, tracking)) = rest.split_once(UPSTREAM_SEPARATOR) else {
        return BranchHeader {
            branch: rest.to_string(),
            ..BranchHeader::default()
        };
    };

    let mut tokens = tracking.split_whitespace();
    let remote = tokens.next().unwrap_or_default().to_string();
    let divergence = parse_divergence(tokens);

    BranchHeader {
        branch: local.to_string(),
        remote,
        ahead: divergence.ahead,
        behind: divergence.behind,
        detached: false,
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Divergence {
    ahead: usize,
    behind: usize,
}

/// Extract the integers following `ahead` / `behind` keywords from the
/// bracketed tail of a header, e.g. `[ahead 2,` `behind 1]`.
fn parse_divergence<'a>(tokens: impl Iterator<Item = &'a str>) -> Divergence {
    let words: Vec<&str> = tokens
        .map(|t| t.trim_matches(|c| matches!(c, '[' | ']' | ',')))
        .filter(|t| !t.is_empty())
        .collect();

    let mut divergence = Divergence::default();
    for pair in words.windows(2) {
        let count = pair[1].parse::<usize>().unwrap_or(0);
        match pair[0] {
            "ahead" => divergence.ahead = count,
            "behind" => divergence.behind = count,
            _ => {}
        }
    }
    divergence
}

/// A `XY path` file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry<'a> {
    /// Index (staging area) status character.
    pub index: char,
    /// Work tree status character.
    pub worktree: char,
    /// Path of the entry; the destination for renames and copies.
    pub path: &'a str,
    /// Source path of a rename or copy.
    pub original_path: Option<&'a str>,
}

impl<'a> FileEntry<'a> {
    /// Parse a file line: two status characters, one separator, then a
    /// non-empty path. Returns `None` for anything shorter.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut chars = line.char_indices();
        let (_, index) = chars.next()?;
        let (_, worktree) = chars.next()?;
        let _separator = chars.next()?;
        let (start, _) = chars.next()?;

        let raw = &line[start..];
        let (original_path, path) = match raw.split_once(RENAME_ARROW) {
            Some((from, to)) if matches!(index, 'R' | 'C') => (Some(from), to),
            _ => (None, raw),
        };

        Some(Self {
            index,
            worktree,
            path,
            original_path,
        })
    }

    /// Decide which buckets this entry counts towards.
    ///
    /// Untracked is exclusive. Otherwise a work tree `M`/`D` counts as
    /// changed, and independently the entry is either a conflict or, when
    /// the index column is set, staged. `DD` therefore counts as both
    /// changed and conflicted.
    #[must_use]
    pub const fn classify(&self) -> Buckets {
        let (x, y) = (self.index, self.worktree);

        if x == '?' && y == '?' {
            return Buckets {
                untracked: true,
                changed: false,
                conflict: false,
                staged: false,
            };
        }

        let conflict = x == 'U' || y == 'U' || (x == 'A' && y == 'A') || (x == 'D' && y == 'D');

        Buckets {
            untracked: false,
            changed: matches!(y, 'M' | 'D'),
            conflict,
            staged: !conflict && x != ' ',
        }
    }
}

/// Buckets a single file entry contributes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Buckets {
    pub untracked: bool,
    pub changed: bool,
    pub conflict: bool,
    pub staged: bool,
}

impl FileCounts {
    /// Add one entry's buckets to the running totals.
    pub fn record(&mut self, buckets: Buckets) {
        self.untracked += usize::from(buckets.untracked);
        self.changed += usize::from(buckets.changed);
        self.conflicts += usize::from(buckets.conflict);
        self.staged += usize::from(buckets.staged);
    }
}

/// Parsed porcelain output, everything but the stash count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Porcelain {
    pub header: BranchHeader,
    pub counts: FileCounts,
}

/// Parse full porcelain output.
///
/// The first header line wins; short lines are skipped.
#[must_use]
pub fn parse(text: &str) -> Porcelain {
    let mut header = None;
    let mut counts = FileCounts::default();

    for line in text.lines() {
        match tokenize(line) {
            Line::Header(parsed) => {
                header.get_or_insert(parsed);
            }
            Line::File(entry) => counts.record(entry.classify()),
            Line::Skipped => {}
        }
    }

    Porcelain {
        header: header.unwrap_or_default(),
        counts,
    }
}
