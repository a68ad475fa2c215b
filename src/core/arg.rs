//! Typed arguments for `{}` placeholders
//!
//! Only the kinds listed in [`Arg`] can be passed to a log call; anything else
//! fails to compile because no `From` conversion exists for it.

use std::fmt;

/// One positional argument of a log call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(&'a str),
    /// UTF-16 code units, as handed over by wide-character callers
    Wide(&'a [u16]),
}

impl Arg<'_> {
    /// Append the rendered argument to `out`.
    pub fn render_into(&self, out: &mut String) {
        use std::fmt::Write;

        match self {
            Arg::Str(s) => out.push_str(s),
            Arg::Wide(units) => out.extend(narrow_units(units)),
            Arg::Char(c) => out.push(*c),
            // Writing to a String cannot fail.
            other => {
                let _ = write!(out, "{}", other);
            }
        }
    }
}

/// Keep the code units that have a single-byte (ASCII) representation.
fn narrow_units(units: &[u16]) -> impl Iterator<Item = char> + '_ {
    units
        .iter()
        .filter(|&&unit| unit < 0x80)
        .map(|&unit| char::from(unit as u8))
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Char(v) => write!(f, "{}", v),
            Arg::I8(v) => write!(f, "{}", v),
            Arg::I16(v) => write!(f, "{}", v),
            Arg::I32(v) => write!(f, "{}", v),
            Arg::I64(v) => write!(f, "{}", v),
            Arg::Isize(v) => write!(f, "{}", v),
            Arg::U8(v) => write!(f, "{}", v),
            Arg::U16(v) => write!(f, "{}", v),
            Arg::U32(v) => write!(f, "{}", v),
            Arg::U64(v) => write!(f, "{}", v),
            Arg::Usize(v) => write!(f, "{}", v),
            Arg::F32(v) => write!(f, "{}", v),
            Arg::F64(v) => write!(f, "{}", v),
            Arg::Str(v) => f.write_str(v),
            Arg::Wide(units) => {
                for c in narrow_units(units) {
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! impl_from_copy {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value)
                }
            }

            impl From<&$ty> for Arg<'_> {
                fn from(value: &$ty) -> Self {
                    Arg::$variant(*value)
                }
            }
        )*
    };
}

impl_from_copy! {
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a &'a str> for Arg<'a> {
    fn from(value: &'a &'a str) -> Self {
        Arg::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(value.as_str())
    }
}

impl<'a> From<&'a [u16]> for Arg<'a> {
    fn from(value: &'a [u16]) -> Self {
        Arg::Wide(value)
    }
}

impl<'a> From<&'a Vec<u16>> for Arg<'a> {
    fn from(value: &'a Vec<u16>) -> Self {
        Arg::Wide(value.as_slice())
    }
}
