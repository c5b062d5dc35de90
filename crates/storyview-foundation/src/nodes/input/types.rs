use std::cell::Cell;
use std::rc::Rc;
use storyview_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event in viewer coordinates.
///
/// `uptime_nanos` is a monotonic timestamp supplied by the platform; only
/// differences between events are meaningful.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_nanos: u64,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_nanos: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_nanos,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_nanos)
    }

    pub fn moved(x: f32, y: f32, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_nanos)
    }

    pub fn up(x: f32, y: f32, uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_nanos)
    }

    pub fn cancel(uptime_nanos: u64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, uptime_nanos)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed by a gesture.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
