//! Sequential containers backing the search frontier.
use core::fmt;

use crate::error::EmptyError;

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;

/// Discovered cells waiting to be expanded. The removal discipline of the
/// implementor decides the traversal: [Stack] searches depth-first, [Queue]
/// breadth-first.
pub trait Frontier<T> {
    fn insert(&mut self, item: T);
    fn remove(&mut self) -> Result<T, EmptyError>;
    fn len(&self) -> usize;
    /// Drops every waiting item.
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const HEADER: &str = "--- top ---\n";
const FOOTER: &str = "--- bot ---";

/// Writes items one per line between the top and bottom markers, right aligned
/// so that the column sits roughly under the middle of the header.
fn fmt_column<'a, T, I>(f: &mut fmt::Formatter, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let lines = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>();
    write!(f, "{}", HEADER)?;
    if let Some(max_len) = lines.iter().map(|l| l.chars().count()).max() {
        let width = max_len + HEADER.len().saturating_sub(max_len) / 2;
        for line in &lines {
            writeln!(f, "{:>width$}", line, width = width)?;
        }
    }
    write!(f, "{}", FOOTER)
}
