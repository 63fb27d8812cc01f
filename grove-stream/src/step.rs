/// The outcome of advancing a cursor once.
///
/// A cursor either yields its next element or reports that it is
/// exhausted. Once a cursor has returned [`Step::Done`] it keeps returning
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The cursor produced a value.
    Yield(T),
    /// The cursor is exhausted.
    Done,
}

impl<T> Step<T> {
    /// The shared exhausted result.
    ///
    /// `Done` carries no data, so handing it out never allocates.
    pub const DONE: Self = Step::Done;

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yield(value) => Some(value),
            Step::Done => None,
        }
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Step<U> {
        match self {
            Step::Yield(value) => Step::Yield(f(value)),
            Step::Done => Step::Done,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Step::Yield(value),
            None => Step::Done,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}
