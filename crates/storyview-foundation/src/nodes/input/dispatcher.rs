//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue pointer events as they arrive and the host
//! drains them into the viewer once per frame, before frame callbacks run.

use std::collections::VecDeque;

use super::types::{PointerEvent, PointerId};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: VecDeque<(PointerId, PointerEvent)>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push_back((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        while let Some((id, event)) = self.queue.pop_front() {
            handler(id, event);
        }
    }
}
