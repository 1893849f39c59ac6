use core::fmt;

use super::{fmt_column, Frontier};
use crate::error::EmptyError;

/// LIFO container on top of a [Vec].
///
/// The element type is fixed when the stack is created, so every element
/// shares one type for the whole lifetime of the stack:
///
/// ```compile_fail
/// use maze_search::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(4);
/// stack.push("a");
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack { data: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::default()
    }

    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Removes and returns the most recently pushed element.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.data.pop().ok_or(EmptyError::new("stack", "pop"))
    }

    pub fn top(&self) -> Result<&T, EmptyError> {
        self.data.last().ok_or(EmptyError::new("stack", "read top"))
    }
}

impl<T> Frontier<T> for Stack<T> {
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

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_column(f, self.data.iter().rev())
    }
}
