//! Builds the emoji picker catalog from Unicode's `emoji-test.txt`.
//!
//! The pipeline lives in [`data`]: [`data::loader`] reads the test file,
//! [`data::cluster`] folds skin-tone variants together and [`data::schema`]
//! orders the groups and writes the property list.

pub mod cli;
pub mod data;
pub mod error;
