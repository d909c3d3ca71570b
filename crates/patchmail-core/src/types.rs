use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::{PatchmailError, Result};
use crate::{classify_line, extract_address};

/// Which header a recipient lands in on the outgoing mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientRole {
    To,
    Cc,
}

impl fmt::Display for RecipientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::To => write!(f, "to"),
            Self::Cc => write!(f, "cc"),
        }
    }
}

/// The patches selected for one submission.
///
/// `source` is the path the operator passed in (a single patch or a directory)
/// and is what gets handed to `git send-email`. `patches` are the individual
/// patch files found under it. A patch set is never empty and never changes
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSet {
    source: PathBuf,
    patches: Vec<PathBuf>,
}

impl PatchSet {
    /// # Errors
    ///
    /// Returns [`PatchmailError::EmptyPatchSet`] if `patches` is empty.
    pub fn new(source: impl Into<PathBuf>, patches: Vec<PathBuf>) -> Result<Self> {
        let source = source.into();
        if patches.is_empty() {
            return Err(PatchmailError::EmptyPatchSet {
                source_path: source,
            });
        }
        Ok(Self { source, patches })
    }

    #[must_use]
    pub fn single(patch: impl Into<PathBuf>) -> Self {
        let patch = patch.into();
        Self {
            source: patch.clone(),
            patches: vec![patch],
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn patches(&self) -> &[PathBuf] {
        &self.patches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.patches.iter()
    }
}

impl<'a> IntoIterator for &'a PatchSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counts of what a single scan of maintainer output contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub to: usize,
    pub cc: usize,
    pub ignored: usize,
    /// Classified lines whose address could not be extracted.
    pub unparsed: usize,
}

/// Recipients derived from maintainer lookups, unique by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSets {
    pub to: BTreeSet<String>,
    pub cc: BTreeSet<String>,
}

impl RecipientSets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the address was not already present for that role.
    pub fn insert(&mut self, role: RecipientRole, address: String) -> bool {
        match role {
            RecipientRole::To => self.to.insert(address),
            RecipientRole::Cc => self.cc.insert(address),
        }
    }

    /// Classifies every line of maintainer-lookup output and records the
    /// extracted addresses.
    ///
    /// A classified line whose address cannot be extracted still contributes
    /// an empty string to its set.
    pub fn scan_output(&mut self, output: &str) -> ScanSummary {
        let mut summary = ScanSummary::default();

        for line in output.lines() {
            let Some(role) = classify_line(line) else {
                summary.ignored += 1;
                continue;
            };

            let address = extract_address(line);
            if address.is_empty() {
                summary.unparsed += 1;
            }

            match role {
                RecipientRole::To => summary.to += 1,
                RecipientRole::Cc => summary.cc += 1,
            }
            self.insert(role, address);
        }

        summary
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.cc.is_empty()
    }
}

/// Final, merged recipient lists in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientLists {
    to: IndexSet<String>,
    cc: IndexSet<String>,
}

impl RecipientLists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I, S>(&mut self, role: RecipientRole, addresses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = match role {
            RecipientRole::To => &mut self.to,
            RecipientRole::Cc => &mut self.cc,
        };
        target.extend(addresses.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn get(&self, role: RecipientRole) -> &IndexSet<String> {
        match role {
            RecipientRole::To => &self.to,
            RecipientRole::Cc => &self.cc,
        }
    }

    #[must_use]
    pub fn to(&self) -> &IndexSet<String> {
        &self.to
    }

    #[must_use]
    pub fn cc(&self) -> &IndexSet<String> {
        &self.cc
    }
}

impl From<RecipientSets> for RecipientLists {
    fn from(sets: RecipientSets) -> Self {
        let mut lists = Self::new();
        lists.extend(RecipientRole::To, sets.to);
        lists.extend(RecipientRole::Cc, sets.cc);
        lists
    }
}

/// Everything needed to hand a patch series to `git send-email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub from: String,
    pub smtp_server: String,
    pub recipients: RecipientLists,
    pub reply_to: Option<String>,
    pub patch_path: PathBuf,
}
