//! Embedded word table
//!
//! Rows compiled into the binary at build time from `data/words.csv`.

// Include generated word table from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
