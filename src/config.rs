pub const DEFAULT_INPUT_PATH: &str = "input.json";

// num-bigint only parses radices in this range
pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

// the one top-level member of a share document that is not a share
pub const KEYS_FIELD: &str = "keys";

// fractional digits shown when a basis value is rendered for logs
pub const TERM_DISPLAY_DIGITS: usize = 10;

pub fn radix_in_range(radix: u32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}
