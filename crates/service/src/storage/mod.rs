//! Storage for the map document.
//!
//! One logical key, one value, replace-on-write. Concurrent saves are
//! last-write-wins; the latest successful write fully replaces prior state.

pub mod game_state;
