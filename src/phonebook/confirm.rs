/// Blocking yes/no question put to the user.
///
/// Callers wait for the answer before continuing, like a modal dialog.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
