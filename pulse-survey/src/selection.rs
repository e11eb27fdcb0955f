//! Bounded multi-select over a candidate set.
//!
//! Two flavours share one toggle rule: selecting an unselected item adds it
//! while there is room, selecting a selected item removes it, and selecting a
//! new item at capacity changes nothing.

use serde::{Deserialize, Serialize};

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// The set was full; nothing changed.
    LimitReached,
}

impl Toggle {
    /// Whether the selection was modified.
    pub fn changed(self) -> bool {
        !matches!(self, Self::LimitReached)
    }
}

/// Error for selections restored from untrusted input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{len} items selected, at most {max} allowed")]
    TooMany { len: usize, max: usize },

    #[error("'{0}' is selected more than once")]
    Duplicate(String),
}

/// Toggle `item` in `set`, holding at most `max_size` items.
///
/// With `ordered`, removal closes the gap and keeps the relative order of the
/// remaining items. Without it, removal may reorder.
pub fn toggle(set: &mut Vec<String>, item: &str, max_size: usize, ordered: bool) -> Toggle {
    if let Some(pos) = set.iter().position(|s| s == item) {
        if ordered {
            set.remove(pos);
        } else {
            set.swap_remove(pos);
        }
        Toggle::Removed
    } else if set.len() < max_size {
        set.push(item.to_string());
        Toggle::Added
    } else {
        Toggle::LimitReached
    }
}

fn check_bounds(items: &[String], max: usize) -> Result<(), SelectionError> {
    if items.len() > max {
        return Err(SelectionError::TooMany {
            len: items.len(),
            max,
        });
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].contains(item) {
            return Err(SelectionError::Duplicate(item.clone()));
        }
    }
    Ok(())
}

/// Up to three priority areas, ranked: index 0 is the highest priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PrioritySelection(Vec<String>);

impl PrioritySelection {
    pub const MAX: usize = 3;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn toggle(&mut self, label: &str) -> Toggle {
        toggle(&mut self.0, label, Self::MAX, true)
    }

    /// 1-based rank of `label`, if selected.
    pub fn rank_of(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|s| s == label).map(|i| i + 1)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|s| s == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for PrioritySelection {
    type Error = SelectionError;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        check_bounds(&items, Self::MAX)?;
        Ok(Self(items))
    }
}

impl From<PrioritySelection> for Vec<String> {
    fn from(selection: PrioritySelection) -> Self {
        selection.0
    }
}

/// Up to four action areas, unordered.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ActionSelection(Vec<String>);

impl ActionSelection {
    pub const MAX: usize = 4;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn toggle(&mut self, label: &str) -> Toggle {
        toggle(&mut self.0, label, Self::MAX, false)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|s| s == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Membership, not order, decides equality.
impl PartialEq for ActionSelection {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|s| other.contains(s))
    }
}

impl TryFrom<Vec<String>> for ActionSelection {
    type Error = SelectionError;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        check_bounds(&items, Self::MAX)?;
        Ok(Self(items))
    }
}

impl From<ActionSelection> for Vec<String> {
    fn from(selection: ActionSelection) -> Self {
        selection.0
    }
}
