//! Human-readable rendering of sets.
//!
//! The `Display` form of a [`Set`] lists its elements in ascending order
//! between braces: `{1, 2, 3}`. Numbers and booleans are written bare;
//! text is written in double quotes with `"`, `'`, `\` and NUL escaped by a
//! backslash. The form is a debugging aid, not a serialization format.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::Set;

/// How a single element is written inside a rendered set.
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
///
/// let numbers = Set::from([3, 1, 2]);
/// assert_eq!(numbers.to_string(), "{1, 2, 3}");
///
/// let words = Set::from(["it's", "a"]);
/// assert_eq!(words.to_string(), r#"{"a", "it\'s"}"#);
/// ```
pub trait RenderElement {
    /// Writes the element to `formatter`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the formatter.
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_bare {
    ($($element:ty),* $(,)?) => {
        $(
            impl RenderElement for $element {
                fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, "{self}")
                }
            }
        )*
    };
}

render_bare!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

fn render_quoted(text: &str, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    formatter.write_str("\"")?;
    for character in text.chars() {
        match character {
            '"' | '\'' | '\\' => write!(formatter, "\\{character}")?,
            '\0' => formatter.write_str("\\0")?,
            _ => write!(formatter, "{character}")?,
        }
    }
    formatter.write_str("\"")
}

impl RenderElement for str {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_quoted(self, formatter)
    }
}

impl RenderElement for String {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_quoted(self, formatter)
    }
}

impl RenderElement for char {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_quoted(self.encode_utf8(&mut [0; 4]), formatter)
    }
}

impl<T: RenderElement + ?Sized> RenderElement for &T {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(formatter)
    }
}

impl<T: RenderElement + ?Sized> RenderElement for Box<T> {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(formatter)
    }
}

impl<T: RenderElement + ?Sized> RenderElement for Rc<T> {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(formatter)
    }
}

impl<T: RenderElement + ?Sized> RenderElement for Arc<T> {
    fn render(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(formatter)
    }
}

impl<T: Ord + RenderElement, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<&T> = self.iter().collect();
        elements.sort_unstable();

        write!(formatter, "{{")?;
        let mut first = true;
        for element in elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            element.render(formatter)?;
        }
        write!(formatter, "}}")
    }
}
