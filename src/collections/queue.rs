use core::fmt;

use super::{fmt_column, Frontier, LinkedList};
use crate::error::EmptyError;

/// FIFO container: pushes go to the right of a [LinkedList], pops come from the left.
///
/// Like [Stack](super::Stack), a queue holds elements of a single type:
///
/// ```compile_fail
/// use maze_search::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(4);
/// queue.push("a");
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    data: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue {
            data: LinkedList::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.data.push_right(item);
    }

    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.data
            .pop_left()
            .map_err(|_| EmptyError::new("queue", "pop"))
    }

    /// The element that the next [pop](Self::pop) returns.
    pub fn top(&self) -> Result<&T, EmptyError> {
        self.data
            .front()
            .map_err(|_| EmptyError::new("queue", "read top"))
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn insert(&mut self, item: T) {
        self.push(item);
    }
    fn remove(&mut self) -> Result<T, EmptyError> {
        self.pop()
    }
    fn len(&self) -> usize {
        self.data.len()
    }
    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_column(f, self.data.iter())
    }
}
