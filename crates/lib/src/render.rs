//! Text rendering for optional values.
//!
//! Two paths exist. `Display` is available whenever the payload implements `Display`
//! and prints `Some(<payload>)` or `None`. [`Render`] is the capability trait for payload
//! types that are not `Display`: a type opts in with an empty `impl Render` and gets the
//! [`FALLBACK`] placeholder, or overrides [`Render::render_fmt`] to print itself.
//! A payload type with no `Render` impl at all cannot use [`Value::render`]; the call
//! does not compile.
//!
//! Both outputs are diagnostics only and are never parsed back.

use std::fmt;

use crate::value::Value;

/// Placeholder printed for payloads that do not override [`Render::render_fmt`].
pub const FALLBACK: &str = "<value>";

/// Capability trait for custom diagnostic rendering.
pub trait Render {
    /// Writes a diagnostic rendering of `self`.
    fn render_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FALLBACK)
    }
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl<T: Render + ?Sized> Render for &T {
    fn render_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render_fmt(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render_fmt(f)
    }
}

impl<T: Render> Render for Value<T> {
    fn render_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Some(inner) => {
                f.write_str("Some(")?;
                inner.render_fmt(f)?;
                f.write_str(")")
            }
            Value::None => f.write_str("None"),
        }
    }
}

/// Adapter that formats a [`Render`] implementor through `Display`.
pub struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render_fmt(f)
    }
}

impl<T: Render> Value<T> {
    /// Renders the value through the payload's [`Render`] implementation.
    pub fn render(&self) -> String {
        self.rendered().to_string()
    }

    /// Returns a `Display` adapter over [`Value::render`], for use in format strings.
    pub fn rendered(&self) -> Rendered<'_, Self> {
        Rendered(self)
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Some(inner) => write!(f, "Some({inner})"),
            Value::None => f.write_str("None"),
        }
    }
}
