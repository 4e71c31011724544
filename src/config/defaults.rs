// src/config/defaults.rs
use crate::config::app::StreamConfig;
use crate::consts::DEFAULT_CHUNK_SIZE;

pub fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

pub fn default_stream() -> StreamConfig {
    StreamConfig {
        chunk_size: default_chunk_size(),
    }
}
