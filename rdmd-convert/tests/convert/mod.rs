//! Integration tests for the conversion engine, by area.

mod inline;
mod properties;
mod scopes;
