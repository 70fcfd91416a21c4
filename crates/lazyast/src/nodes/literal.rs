//! Literal nodes: numbers, strings, regular expressions and template literals.

use alloc::string::ToString;

use super::*;
use crate::{
    Result,
    layout::{Decode, DecodeCx, Unmemoized},
    value::Value,
};

node! {
    /// `true` or `false`.
    pub struct BooleanLiteral(12) {
        field value @ 8: bool = "value",
    }
}

node! {
    /// `null`.
    pub struct NullLiteral(8) {
    }
}

node! {
    /// A numeric literal such as `1`, `0x1f` or `1e3`.
    ///
    /// `raw` is the literal as written in source; `value` is the parsed number.
    pub struct NumericLiteral(32) {
        field value @ 8: f64 = "value",
        field raw @ 16: Option<Str> = "raw",
    }
}

node! {
    /// A string literal. `value` has escapes resolved.
    pub struct StringLiteral(48, none = discriminant(40, 2)) {
        field value @ 8: Str = "value",
        field raw @ 24: Option<Str> = "raw",
    }
}

node! {
    /// A `BigInt` literal such as `10n`.
    pub struct BigIntLiteral(40) {
        field value @ 8: Str = "value",
        field raw @ 24: Option<Str> = "raw",
    }
}

node! {
    /// A regular expression literal, `/pattern/flags`.
    pub struct RegExpLiteral(56) {
        field regex @ 8: RegExp = "regex",
        field raw @ 40: Option<Str> = "raw",
    }
}

record! {
    /// The pattern and flags of a [`RegExpLiteral`].
    pub struct RegExp(32) {
        field pattern @ 0: RegExpPattern = "pattern",
        field flags @ 24: RegExpFlags = "flags",
    }
}

record! {
    /// Source text of a regular expression pattern, without the slashes.
    pub struct RegExpPattern(16) {
        field pattern @ 0: Str = "pattern",
    }
}

node! {
    /// `` `quasi ${expression} quasi` ``
    pub struct TemplateLiteral(56) {
        child quasis @ 8: Seq<TemplateElement> = "quasis",
        child expressions @ 32: Seq<Expression> = "expressions",
    }
}

node! {
    /// `` tag`quasi` ``
    pub struct TaggedTemplateExpression(88) {
        child tag @ 8: Expression = "tag",
        child quasi @ 32: TemplateLiteral = "quasi",
    }
}

node! {
    /// One static chunk of a template literal.
    pub struct TemplateElement(48) {
        field value @ 8: TemplateElementValue = "value",
        field tail @ 40: bool = "tail",
    }
}

record! {
    /// Raw and cooked text of a [`TemplateElement`].
    ///
    /// `cooked` is absent when the raw text contains an invalid escape in a tagged template.
    pub struct TemplateElementValue(32) {
        field raw @ 0: Str = "raw",
        field cooked @ 16: Option<Str> = "cooked",
    }
}

/// The flags of a regular expression, one bit per flag.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegExpFlags(u8);

impl RegExpFlags {
    /// Flag letters with their bits, in the order they are printed.
    const LETTERS: [(char, u8); 8] = [
        ('d', 64),
        ('g', 1),
        ('i', 2),
        ('m', 4),
        ('s', 8),
        ('u', 16),
        ('v', 128),
        ('y', 32),
    ];

    /// Wraps raw flag bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `flag` (one of `dgimsuvy`) is set.
    #[must_use]
    pub fn contains(self, flag: char) -> bool {
        Self::LETTERS
            .iter()
            .any(|&(letter, bit)| letter == flag && self.0 & bit != 0)
    }
}

/// The flags as written after the closing slash, in alphabetical order.
impl core::fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;
        for (letter, bit) in Self::LETTERS {
            if self.0 & bit != 0 {
                f.write_char(letter)?;
            }
        }
        Ok(())
    }
}

impl Decode for RegExpFlags {
    type Output = Self;
    type Memo = Unmemoized;
    const NAME: &'static str = "RegExpFlags";
    const SIZE: u32 = 1;

    fn decode(pos: u32, cx: &DecodeCx<'_>) -> Result<Self> {
        cx.ast().read_u8(pos).map(Self)
    }

    fn plain(value: &Self) -> Result<Value> {
        Ok(Value::String(value.to_string()))
    }
}
