//! Hand-off to the host's screen stack.

/// Receives the single "go back" request issued when a story is dismissed.
///
/// The navigator owns the exit transition; the viewer never animates its own
/// transform after handing off.
pub trait Navigator {
    fn go_back(&mut self);
}

impl<F> Navigator for F
where
    F: FnMut(),
{
    fn go_back(&mut self) {
        self()
    }
}
