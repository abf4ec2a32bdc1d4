pub const READ_BUFFER_SIZE: usize = 1024;

pub const HEADER_SUFFIX: &str = ".h";
pub const MACRO_PREFIX: &str = "EMBED_";

pub const DELIMITER: u8 = b',';
