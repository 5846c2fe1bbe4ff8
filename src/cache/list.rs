//! Recency List Module
//!
//! Doubly linked list of entries stored in an arena, ordered by recency.

use crate::cache::Entry;

// == Node ==
/// Arena slot payload: an entry plus its neighbours' slot indices.
#[derive(Debug)]
struct Node<V> {
    entry: Entry<V>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks entries in access order with O(1) move-to-front and removal.
///
/// Nodes live in a `Vec` and refer to each other by index, so there are no
/// reference cycles. Freed slots go on a free-list and are reused by later
/// pushes. Slot indices stay valid until the entry at that slot is removed.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
#[derive(Debug)]
pub struct RecencyList<V> {
    nodes: Vec<Option<Node<V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<V> RecencyList<V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its slot.
    pub fn push_front(&mut self, entry: Entry<V>) -> usize {
        let idx = self.alloc_slot();
        self.nodes[idx] = Some(Node {
            entry,
            prev: None,
            next: None,
        });
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the entry at `idx` as most recently used.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || self.get(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Removes the entry at `idx`, releasing its slot for reuse.
    pub fn remove(&mut self, idx: usize) -> Option<Entry<V>> {
        self.get(idx)?;
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    pub fn pop_back(&mut self) -> Option<Entry<V>> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Back ==
    /// Returns the least recently used entry without removing it.
    pub fn back(&self) -> Option<&Entry<V>> {
        self.tail.and_then(|idx| self.get(idx))
    }

    pub fn get(&self, idx: usize) -> Option<&Entry<V>> {
        self.nodes
            .get(idx)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<V>> {
        self.nodes
            .get_mut(idx)
            .and_then(|slot| slot.as_mut())
            .map(|node| &mut node.entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            self.nodes.push(None);
            self.nodes.len() - 1
        }
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head) = &mut self.nodes[head_idx] {
                    head.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = None;
        }
    }
}

impl<V> Default for RecencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    cursor: Option<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.nodes[idx].as_ref()?;
        self.cursor = node.next;
        Some(&node.entry)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> Entry<String> {
        Entry::new(key.to_string(), format!("value_{}", key))
    }

    fn keys(list: &RecencyList<String>) -> Vec<String> {
        list.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<String> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = RecencyList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.back().map(|e| e.key.as_str()), Some("a"));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        let c = list.push_front(entry("c"));

        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "c", "b"]);

        // Already at front: no change
        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "c", "b"]);

        list.move_to_front(c);
        assert_eq!(keys(&list), vec!["c", "a", "b"]);
        assert_eq!(list.back().map(|e| e.key.as_str()), Some("b"));
    }

    #[test]
    fn test_remove_middle_head_and_tail() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        let c = list.push_front(entry("c"));

        assert_eq!(list.remove(b).map(|e| e.key), Some("b".to_string()));
        assert_eq!(keys(&list), vec!["c", "a"]);

        assert_eq!(list.remove(c).map(|e| e.key), Some("c".to_string()));
        assert_eq!(keys(&list), vec!["a"]);

        assert_eq!(list.remove(a).map(|e| e.key), Some("a".to_string()));
        assert!(list.is_empty());
        assert!(list.back().is_none());
    }

    #[test]
    fn test_remove_vacant_slot() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));
        list.remove(a);

        assert!(list.remove(a).is_none());
        assert!(list.remove(42).is_none());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_pop_back_drains_in_lru_order() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));
        list.move_to_front(a);

        assert_eq!(list.pop_back().map(|e| e.key), Some("b".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("c".to_string()));
        assert_eq!(list.pop_back().map(|e| e.key), Some("a".to_string()));
        assert!(list.pop_back().is_none());
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.remove(a);

        let c = list.push_front(entry("c"));
        assert_eq!(c, a);
        assert_eq!(list.get(c).map(|e| e.key.as_str()), Some("c"));
        assert_eq!(keys(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_updates_value() {
        let mut list = RecencyList::new();
        let a = list.push_front(entry("a"));

        if let Some(e) = list.get_mut(a) {
            e.value = "changed".to_string();
        }
        assert_eq!(list.get(a).map(|e| e.value.as_str()), Some("changed"));
    }
}
