//! Ready queues.
//!
//! FIFO queues serve FCFS and Round Robin. Keyed queues are binary heaps
//! ranked by an [`OrderingKey`], giving O(log n) dispatch for the
//! shortest-job and priority disciplines.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::OrderingKey;
use crate::models::Process;

/// Heap entry. `seq` records insertion order for the final tie-break.
#[derive(Debug)]
struct Ranked {
    key: OrderingKey,
    seq: u64,
    process: Process,
}

impl Ranked {
    fn dispatch_order(&self, other: &Self) -> Ordering {
        self.key
            .compare_with_tie_break(&self.process, &other.process)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// BinaryHeap is a max-heap, so the process to dispatch first must compare greatest.
impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dispatch_order(self)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

#[derive(Debug)]
enum Inner {
    Fifo(VecDeque<Process>),
    Keyed {
        key: OrderingKey,
        heap: BinaryHeap<Ranked>,
        next_seq: u64,
    },
}

/// Processes that have arrived but are neither running nor complete.
///
/// FIFO queues keep insertion order. Keyed queues rank by their key and
/// break ties by arrival, id, then insertion order.
#[derive(Debug)]
pub struct ReadyQueue {
    inner: Inner,
}

impl ReadyQueue {
    /// Creates an empty FIFO queue.
    pub fn fifo() -> Self {
        Self {
            inner: Inner::Fifo(VecDeque::new()),
        }
    }

    /// Creates an empty queue ranked by `key`.
    pub fn keyed(key: OrderingKey) -> Self {
        Self {
            inner: Inner::Keyed {
                key,
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    /// Creates the queue for an optional ranking; `None` means FIFO.
    pub fn for_order(order: Option<OrderingKey>) -> Self {
        match order {
            Some(key) => Self::keyed(key),
            None => Self::fifo(),
        }
    }

    pub fn push(&mut self, process: Process) {
        match &mut self.inner {
            Inner::Fifo(processes) => processes.push_back(process),
            Inner::Keyed {
                key,
                heap,
                next_seq,
            } => {
                heap.push(Ranked {
                    key: *key,
                    seq: *next_seq,
                    process,
                });
                *next_seq += 1;
            }
        }
    }

    /// Removes the process that should be dispatched next.
    pub fn pop(&mut self) -> Option<Process> {
        match &mut self.inner {
            Inner::Fifo(processes) => processes.pop_front(),
            Inner::Keyed { heap, .. } => heap.pop().map(|r| r.process),
        }
    }

    /// The process that would be dispatched next.
    pub fn peek(&self) -> Option<&Process> {
        match &self.inner {
            Inner::Fifo(processes) => processes.front(),
            Inner::Keyed { heap, .. } => heap.peek().map(|r| &r.process),
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Fifo(processes) => processes.len(),
            Inner::Keyed { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
