use core::fmt;
use slab::Slab;

use crate::error::EmptyError;

#[derive(Clone, Debug)]
struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked list with constant time insertion and removal at both ends.
///
/// Nodes live in a [Slab] and link to each other by key, so no node owns its
/// neighbours and freed slots are reused by later insertions. The number of
/// occupied slab entries is always the number of nodes reachable from the head.
///
/// All nodes carry the same element type:
///
/// ```compile_fail
/// use maze_search::collections::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_right(4);
/// list.push_left("a");
/// ```
#[derive(Clone, Debug)]
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> LinkedList<T> {
        LinkedList {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Data at the head of the list.
    pub fn front(&self) -> Result<&T, EmptyError> {
        self.head
            .map(|ix| &self.nodes[ix].data)
            .ok_or(EmptyError::new("list", "read front"))
    }

    /// Data at the tail of the list.
    pub fn back(&self) -> Result<&T, EmptyError> {
        self.tail
            .map(|ix| &self.nodes[ix].data)
            .ok_or(EmptyError::new("list", "read back"))
    }

    pub fn push_left(&mut self, item: T) {
        let ix = self.nodes.insert(Node {
            data: item,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(ix),
            None => self.tail = Some(ix),
        }
        self.head = Some(ix);
    }

    pub fn push_right(&mut self, item: T) {
        let ix = self.nodes.insert(Node {
            data: item,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(ix),
            None => self.head = Some(ix),
        }
        self.tail = Some(ix);
    }

    pub fn pop_left(&mut self) -> Result<T, EmptyError> {
        let ix = self.head.ok_or(EmptyError::new("list", "pop left"))?;
        let node = self.nodes.remove(ix);
        self.head = node.next;
        match node.next {
            Some(new_head) => self.nodes[new_head].prev = None,
            None => self.tail = None,
        }
        Ok(node.data)
    }

    pub fn pop_right(&mut self) -> Result<T, EmptyError> {
        let ix = self.tail.ok_or(EmptyError::new("list", "pop right"))?;
        let node = self.nodes.remove(ix);
        self.tail = node.prev;
        match node.prev {
            Some(new_tail) => self.nodes[new_tail].next = None,
            None => self.head = None,
        }
        Ok(node.data)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.list.nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.data)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_right(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "head->")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "<->")?;
            }
            write!(f, "[{}]", item)?;
        }
        write!(f, "<-tail")
    }
}
