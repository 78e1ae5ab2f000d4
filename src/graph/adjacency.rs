// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use ahash::AHashMap;

#[derive(Debug, Clone, Copy, Default)]
struct Links {
    prev: Option<usize>,
    next: Option<usize>,
}

/// The edges incident to one vertex, as a doubly-linked list over edge
/// handles. Link cells are keyed by edge handle, so every splice
/// operation is O(1); the embedding-order pass depends on that.
///
/// The list order is the rotation order of the vertex once the tester
/// has finished.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    links: AHashMap<usize, Links>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<usize> {
        self.head
    }

    pub fn last(&self) -> Option<usize> {
        self.tail
    }

    pub fn contains(&self, edge: usize) -> bool {
        self.links.contains_key(&edge)
    }

    /// The successor of `edge` in this list.
    pub fn next_of(&self, edge: usize) -> Option<usize> {
        self.links.get(&edge).and_then(|l| l.next)
    }

    pub fn push_back(&mut self, edge: usize) {
        debug_assert!(!self.contains(edge));
        let links = Links { prev: self.tail, next: None };
        self.links.insert(edge, links);
        match self.tail {
            Some(t) => self.link_next(t, Some(edge)),
            None => self.head = Some(edge),
        }
        self.tail = Some(edge);
        self.len += 1;
    }

    pub fn push_front(&mut self, edge: usize) {
        debug_assert!(!self.contains(edge));
        let links = Links { prev: None, next: self.head };
        self.links.insert(edge, links);
        match self.head {
            Some(h) => self.link_prev(h, Some(edge)),
            None => self.tail = Some(edge),
        }
        self.head = Some(edge);
        self.len += 1;
    }

    /// Moves an already present edge to the front of the list.
    pub fn move_front(&mut self, edge: usize) {
        if !self.contains(edge) {
            return;
        }
        self.detach(edge);
        self.len -= 1;
        self.links.remove(&edge);
        self.push_front(edge);
    }

    /// Moves `edge` directly before `fixed`. Both must be in the list.
    pub fn move_before(&mut self, edge: usize, fixed: usize) {
        if edge == fixed || !self.contains(edge) || !self.contains(fixed) {
            return;
        }
        self.detach(edge);
        let fixed_prev = self.links[&fixed].prev;
        self.set_links(edge, fixed_prev, Some(fixed));
        match fixed_prev {
            Some(p) => self.link_next(p, Some(edge)),
            None => self.head = Some(edge),
        }
        self.link_prev(fixed, Some(edge));
    }

    /// Moves `edge` directly behind `fixed`. Both must be in the list.
    pub fn move_after(&mut self, edge: usize, fixed: usize) {
        if edge == fixed || !self.contains(edge) || !self.contains(fixed) {
            return;
        }
        self.detach(edge);
        let fixed_next = self.links[&fixed].next;
        self.set_links(edge, Some(fixed), fixed_next);
        match fixed_next {
            Some(n) => self.link_prev(n, Some(edge)),
            None => self.tail = Some(edge),
        }
        self.link_next(fixed, Some(edge));
    }

    /// Discards the current order and reinserts the given edges back to
    /// front. Used after sorting.
    pub fn rebuild(&mut self, order: &[usize]) {
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.links.clear();
        for &e in order {
            self.push_back(e);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, cur: self.head }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Unlinks `edge` from its neighbors without touching its own cell.
    fn detach(&mut self, edge: usize) {
        let Links { prev, next } = self.links[&edge];
        match prev {
            Some(p) => self.link_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.link_prev(n, prev),
            None => self.tail = prev,
        }
    }

    fn set_links(&mut self, edge: usize, prev: Option<usize>, next: Option<usize>) {
        if let Some(l) = self.links.get_mut(&edge) {
            l.prev = prev;
            l.next = next;
        }
    }

    fn link_next(&mut self, edge: usize, next: Option<usize>) {
        if let Some(l) = self.links.get_mut(&edge) {
            l.next = next;
        }
    }

    fn link_prev(&mut self, edge: usize, prev: Option<usize>) {
        if let Some(l) = self.links.get_mut(&edge) {
            l.prev = prev;
        }
    }
}

pub struct Iter<'a> {
    list: &'a AdjacencyList,
    cur: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cur = self.cur?;
        self.cur = self.list.links.get(&cur).and_then(|l| l.next);
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_iterate() {
        let mut list = AdjacencyList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
        assert_eq!(list.first(), Some(0));
        assert_eq!(list.last(), Some(2));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn splice_operations() {
        let mut list = AdjacencyList::new();
        for e in 0..5 {
            list.push_back(e);
        }
        list.move_front(3);
        assert_eq!(list.to_vec(), vec![3, 0, 1, 2, 4]);
        list.move_before(4, 0);
        assert_eq!(list.to_vec(), vec![3, 4, 0, 1, 2]);
        list.move_after(3, 2);
        assert_eq!(list.to_vec(), vec![4, 0, 1, 2, 3]);
        // moving to the current position keeps the list intact
        list.move_after(0, 4);
        assert_eq!(list.to_vec(), vec![4, 0, 1, 2, 3]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn rebuild_resets_order() {
        let mut list = AdjacencyList::new();
        for e in 0..4 {
            list.push_back(e);
        }
        list.rebuild(&[2, 0, 3, 1]);
        assert_eq!(list.to_vec(), vec![2, 0, 3, 1]);
    }
}
