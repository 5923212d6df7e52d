/// Suppresses a second request of one mutation kind while the first is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(bool);

impl InFlight {
    /// Marks the guard busy. Returns false if it already was.
    pub fn try_acquire(&mut self) -> bool {
        if self.0 { return false; }
        self.0 = true;
        true
    }

    pub fn release(&mut self) { self.0 = false; }

    pub fn is_active(&self) -> bool { self.0 }
}
