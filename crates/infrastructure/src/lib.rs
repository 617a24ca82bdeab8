//! wirelookup infrastructure layer: DNS wire codec, UDP transport and the
//! resolver that composes them.
pub mod dns;
