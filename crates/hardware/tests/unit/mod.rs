//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the decoder
//! and the detection pass, organized the same way as the library modules.





/// Unit tests for platform descriptions and hart enumeration.
pub mod platform;
