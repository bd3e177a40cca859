//! Test suite for the `gqlfp` command-line interface.

mod utils;
