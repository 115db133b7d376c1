/// Holds at most one value.
///
/// Scope is whatever owns it: [`super::RoundsScreen`] keeps one per screen
/// instance, so the cached rounds live exactly as long as the screen and a
/// new screen starts cold.
#[derive(Debug, Clone, Default)]
pub struct SingleSlotCache<T> {
    slot: Option<T>,
}

impl<T: Clone> SingleSlotCache<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn get(&self) -> Option<T> {
        self.slot.clone()
    }

    /// Overwrite the slot with a fresh value.
    pub fn store(&mut self, value: T) {
        self.slot = Some(value);
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_filled(&self) -> bool {
        self.slot.is_some()
    }
}
