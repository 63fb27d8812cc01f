use std::fmt::Write;
use std::rc::Rc;

use super::core::Stream;
use super::nested::Nested;

/// Text written for an absent element.
pub const ABSENT_TEXT: &str = "undefined";

/// Text written for an element without a textual form of its own.
pub const OPAQUE_TEXT: &str = "[object]";

/// How an element renders inside [`Stream::join`].
///
/// Types with a natural textual form write it; the default writes
/// [`OPAQUE_TEXT`], so opaque types can opt in with an empty impl.
pub trait JoinText {
    fn join_text(&self, out: &mut String) {
        out.push_str(OPAQUE_TEXT);
    }
}

macro_rules! join_text_display {
    ($($t:ty),*) => {
        $(
            impl JoinText for $t {
                fn join_text(&self, out: &mut String) {
                    // writing to a String never fails
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

join_text_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl<T> JoinText for &T
where
    T: JoinText + ?Sized,
{
    fn join_text(&self, out: &mut String) {
        (**self).join_text(out)
    }
}

impl<T> JoinText for Rc<T>
where
    T: JoinText + ?Sized,
{
    fn join_text(&self, out: &mut String) {
        (**self).join_text(out)
    }
}

impl<T> JoinText for Box<T>
where
    T: JoinText + ?Sized,
{
    fn join_text(&self, out: &mut String) {
        (**self).join_text(out)
    }
}

impl<T> JoinText for Option<T>
where
    T: JoinText,
{
    fn join_text(&self, out: &mut String) {
        match self {
            Some(value) => value.join_text(out),
            None => out.push_str(ABSENT_TEXT),
        }
    }
}

// nested streams render as their own comma separated join
impl<'a, T> JoinText for Stream<'a, T>
where
    T: JoinText + 'a,
{
    fn join_text(&self, out: &mut String) {
        self.write_joined(",", out)
    }
}

impl<'a, T> JoinText for Nested<'a, T>
where
    T: JoinText + 'a,
{
    fn join_text(&self, out: &mut String) {
        match self {
            Nested::Value(value) => value.join_text(out),
            Nested::Stream(stream) => stream.join_text(out),
        }
    }
}

impl<'a, T> Stream<'a, T>
where
    T: JoinText + 'a,
{
    /// The textual form of every element, separated by `separator`.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        self.write_joined(separator, &mut out);
        out
    }

    fn write_joined(&self, separator: &str, out: &mut String) {
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            element.join_text(out);
        }
    }
}
