use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The seventh character of an identity code, selecting the birth century.
///
/// `Y X W V U` and `B C D E F` were introduced in 2023 as alternatives to
/// `-` and `A`; they mean exactly the same century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum CenturySign {
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "Y")]
    Y,
    #[display(fmt = "X")]
    X,
    #[display(fmt = "W")]
    W,
    #[display(fmt = "V")]
    V,
    #[display(fmt = "U")]
    U,
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
    #[display(fmt = "C")]
    C,
    #[display(fmt = "D")]
    D,
    #[display(fmt = "E")]
    E,
    #[display(fmt = "F")]
    F,
}

/// Signs for births in 1800-1899
pub const SIGNS_1800: &[CenturySign] = &[CenturySign::Plus];
/// Signs for births in 1900-1999
pub const SIGNS_1900: &[CenturySign] = &[
    CenturySign::Minus,
    CenturySign::Y,
    CenturySign::X,
    CenturySign::W,
    CenturySign::V,
    CenturySign::U,
];
/// Signs for births in 2000-2099
pub const SIGNS_2000: &[CenturySign] = &[
    CenturySign::A,
    CenturySign::B,
    CenturySign::C,
    CenturySign::D,
    CenturySign::E,
    CenturySign::F,
];

impl CenturySign {
    /// First year of the century this sign stands for
    pub const fn century(self) -> u16 {
        match self {
            Self::Plus => 1800,
            Self::Minus | Self::Y | Self::X | Self::W | Self::V | Self::U => 1900,
            Self::A | Self::B | Self::C | Self::D | Self::E | Self::F => 2000,
        }
    }

    /// Legal signs for a century (`1800`, `1900` or `2000`), `None` otherwise
    pub const fn for_century(century: u16) -> Option<&'static [Self]> {
        match century {
            1800 => Some(SIGNS_1800),
            1900 => Some(SIGNS_1900),
            2000 => Some(SIGNS_2000),
            _ => None,
        }
    }

    /// Birth years for which codes with this sign are issued.
    ///
    /// `+` codes start from 1850 and `A`-`F` codes end with 2029; the format
    /// gate enforces the same windows on the two digit year.
    pub const fn issued_years(self) -> RangeInclusive<u16> {
        match self {
            Self::Plus => 1850..=1899,
            Self::Minus | Self::Y | Self::X | Self::W | Self::V | Self::U => 1900..=1999,
            Self::A | Self::B | Self::C | Self::D | Self::E | Self::F => 2000..=2029,
        }
    }

    /// Legal signs for someone born in `year`, `None` if no sign can encode it
    pub fn for_year(year: u16) -> Option<&'static [Self]> {
        Self::for_century(year / 100 * 100)
            .filter(|signs| signs.iter().all(|sign| sign.issued_years().contains(&year)))
    }

    pub const fn from_char(c: char) -> Option<Self> {
        let sign = match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            'Y' => Self::Y,
            'X' => Self::X,
            'W' => Self::W,
            'V' => Self::V,
            'U' => Self::U,
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            'E' => Self::E,
            'F' => Self::F,
            _ => return None,
        };
        Some(sign)
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Y => 'Y',
            Self::X => 'X',
            Self::W => 'W',
            Self::V => 'V',
            Self::U => 'U',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

/// Error for a character that is not a century sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Not a century sign: {0:?}")]
pub struct UnknownCenturySign(pub char);

impl TryFrom<char> for CenturySign {
    type Error = UnknownCenturySign;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(UnknownCenturySign(c))
    }
}

impl From<CenturySign> for char {
    fn from(sign: CenturySign) -> Self {
        sign.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SIGNS: &str = "+-YXWVUABCDEF";

    #[test]
    fn test_sign_to_century() {
        let cases = [
            ('+', 1800),
            ('-', 1900),
            ('Y', 1900),
            ('X', 1900),
            ('W', 1900),
            ('V', 1900),
            ('U', 1900),
            ('A', 2000),
            ('B', 2000),
            ('C', 2000),
            ('D', 2000),
            ('E', 2000),
            ('F', 2000),
        ];
        for (c, century) in cases {
            let sign = CenturySign::from_char(c).unwrap();
            assert_eq!(sign.century(), century, "sign {c}");
        }
    }

    #[test]
    fn test_char_round_trip() {
        for c in ALL_SIGNS.chars() {
            let sign = CenturySign::try_from(c).unwrap();
            assert_eq!(sign.as_char(), c);
            assert_eq!(sign.to_string(), c.to_string());
        }
    }

    #[test]
    fn test_unknown_signs() {
        for c in "GZaf01 *".chars() {
            assert_eq!(CenturySign::try_from(c), Err(UnknownCenturySign(c)));
        }
    }

    #[test]
    fn test_tables_agree() {
        // every sign appears exactly once, under its own century
        let mut seen = 0;
        for century in [1800, 1900, 2000] {
            for sign in CenturySign::for_century(century).unwrap() {
                assert_eq!(sign.century(), century);
                seen += 1;
            }
        }
        assert_eq!(seen, ALL_SIGNS.len());
    }

    #[test]
    fn test_for_century_outside_range() {
        assert_eq!(CenturySign::for_century(1700), None);
        assert_eq!(CenturySign::for_century(2100), None);
        assert_eq!(CenturySign::for_century(1950), None);
    }

    #[test]
    fn test_for_year_windows() {
        assert_eq!(CenturySign::for_year(1849), None);
        assert_eq!(CenturySign::for_year(1850), Some(SIGNS_1800));
        assert_eq!(CenturySign::for_year(1899), Some(SIGNS_1800));
        assert_eq!(CenturySign::for_year(1900), Some(SIGNS_1900));
        assert_eq!(CenturySign::for_year(2029), Some(SIGNS_2000));
        assert_eq!(CenturySign::for_year(2030), None);
        assert_eq!(CenturySign::for_year(2100), None);
    }

    #[test]
    fn test_issued_years_agree_with_format_gate() {
        for c in ALL_SIGNS.chars() {
            let sign = CenturySign::from_char(c).unwrap();
            for yy in 0..100u16 {
                let pic = format!("0101{yy:02}{c}1000");
                assert_eq!(
                    crate::format::matches(&pic),
                    sign.issued_years().contains(&(sign.century() + yy)),
                    "{pic}"
                );
            }
        }
    }

    #[test]
    fn test_serde_as_char() {
        assert_eq!(serde_json::to_string(&CenturySign::A).unwrap(), "\"A\"");
        let sign: CenturySign = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(sign, CenturySign::Minus);
        assert!(serde_json::from_str::<CenturySign>("\"G\"").is_err());
    }
}
