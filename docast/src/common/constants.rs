// path constants
pub const FIELD_SEPARATOR: char = '.';
pub const FLAT_SEPARATOR: char = '_';

// time constants
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// textual layouts accepted by the date coercions, 'd' stands for an ASCII digit
pub const DATE_LAYOUT: &str = "dddd-dd-dd";
pub const DATE_TIME_LAYOUT: &str = "dddd-dd-ddTdd:dd:dd";

// uuid constants
pub const HYPHENATED_UUID_LEN: usize = 36;
