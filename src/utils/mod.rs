pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod timezone;

pub(crate) use date::parse_date;
pub(crate) use debug::{parse_debug_enabled, set_parse_debug};
pub(crate) use timezone::Timezone;
