//! Tests for the ISA-5.1 tag codec
