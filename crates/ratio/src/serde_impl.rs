//! Fractions serialize as a `(numerator, denominator)` tuple and are validated
//! through [`Fraction::new`] when deserialized.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Fraction;

impl Serialize for Fraction {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.into_parts().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (num, denom) = <(i64, i64)>::deserialize(deserializer)?;
        Fraction::new(num, denom).map_err(de::Error::custom)
    }
}
