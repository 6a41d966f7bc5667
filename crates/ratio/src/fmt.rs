//! Textual formatting of fractions as `numerator/denominator`.
//!
//! Every integer formatting trait is supported and applies to both parts.
//! Sign, width and fill flags apply to the fraction as a whole, while the
//! alternate flag prefixes each part. Zero padding behaves like it does for a
//! signed integer: the zeros go between the sign and the numerator, so
//! `{:08}` of `-1/2` is `-00001/2`.
//!
//! ```
//! use ratio::Fraction;
//!
//! let f = Fraction::new(-255, 16)?;
//! assert_eq!(f.to_string(), "-255/16");
//! assert_eq!(format!("{f:x}"), "-ff/10");
//! assert_eq!(format!("{f:#x}"), "-0xff/0x10");
//! assert_eq!(format!("{:+}", Fraction::new(1, 2)?), "+1/2");
//! assert_eq!(format!("{:>6}", Fraction::new(1, 2)?), "   1/2");
//! assert_eq!(format!("{:08}", Fraction::new(-1, 2)?), "-00001/2");
//! # Ok::<_, ratio::Error>(())
//! ```

use core::fmt::{self, Write};

use crate::Fraction;

/// Fits two binary formatted `u64` values, a separator and a prefix.
const CAPACITY: usize = 136;

/// Stack buffer the unsigned parts are rendered into before padding.
struct Buf {
    data: [u8; CAPACITY],
    len: usize,
}

impl Buf {
    #[inline]
    const fn new() -> Self {
        Self {
            data: [0; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    fn as_str(&self) -> Result<&str, fmt::Error> {
        core::str::from_utf8(&self.data[..self.len]).map_err(|_| fmt::Error)
    }
}

impl Write for Buf {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        let target = self.data.get_mut(self.len..end).ok_or(fmt::Error)?;
        target.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

macro_rules! impl_fmt {
    ($($trait:ident => $prefix:literal, $plain:literal, $alternate:literal;)*) => {
        $(
            impl fmt::$trait for Fraction {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let (num, denom) = self.into_parts();
                    let mut buf = Buf::new();

                    // The numerator prefix is added by `pad_integral`.
                    if f.alternate() {
                        write!(buf, $alternate, num.unsigned_abs(), denom)?;
                    } else {
                        write!(buf, $plain, num.unsigned_abs(), denom)?;
                    }

                    f.pad_integral(num >= 0, $prefix, buf.as_str()?)
                }
            }
        )*
    };
}

impl_fmt! {
    Display => "", "{}/{}", "{}/{}";
    Binary => "0b", "{:b}/{:b}", "{:b}/{:#b}";
    Octal => "0o", "{:o}/{:o}", "{:o}/{:#o}";
    LowerHex => "0x", "{:x}/{:x}", "{:x}/{:#x}";
    UpperHex => "0x", "{:X}/{:X}", "{:X}/{:#X}";
}
