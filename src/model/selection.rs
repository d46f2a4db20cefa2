/// A choice from a closed set that may not have been made yet.
///
/// Used for the draft's enum-constrained fields so that "nothing picked" is a
/// state of its own rather than an empty-string sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    #[default]
    Unselected,
    Selected(T),
}

impl<T: Copy + PartialEq> Selection<T> {
    /// Returns the selected value, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(v) => Some(*v),
        }
    }

    /// Returns `true` if a value has been chosen.
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    /// Moves to the next or previous option in `options`, wrapping around.
    ///
    /// From [`Selection::Unselected`], forward picks the first option and
    /// backward picks the last.
    pub fn cycle(&mut self, options: &[T], forward: bool) {
        if options.is_empty() {
            return;
        }
        let next = match self.value().and_then(|v| options.iter().position(|&o| o == v)) {
            None if forward => 0,
            None => options.len() - 1,
            Some(pos) if forward => (pos + 1) % options.len(),
            Some(pos) => (pos + options.len() - 1) % options.len(),
        };
        *self = Selection::Selected(options[next]);
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Selected(value)
    }
}
