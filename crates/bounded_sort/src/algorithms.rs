pub(crate) mod common;
pub(crate) mod counting_buffer;
pub(crate) mod reconstruct;
