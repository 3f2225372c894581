/// Length of a personal identity code in characters
pub const PIC_LENGTH: usize = 11;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month length
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Check characters indexed by `base % 31`. G, I, O and Q are never used.
pub const CHECKSUM_ALPHABET: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Modulus of the check character computation
pub const CHECKSUM_MODULUS: u32 = 31;

/// Youngest age accepted by the generator
pub const MIN_AGE: i32 = 1;
/// Oldest age accepted by the generator
pub const MAX_AGE: i32 = 200;

/// Lowest rolling id handed out by the generator (000-099 are never issued to people)
pub const MIN_GENERATED_ROLLING_ID: u32 = 100;
/// Highest rolling id handed out by the generator (900-999 are temporary ids)
pub const MAX_GENERATED_ROLLING_ID: u32 = 899;

/// Display value of [`Sex::Male`](crate::Sex::Male)
pub const MALE: &str = "male";
/// Display value of [`Sex::Female`](crate::Sex::Female)
pub const FEMALE: &str = "female";
