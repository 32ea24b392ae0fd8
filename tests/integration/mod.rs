//! Integration tests for golden fixture comparison and update

mod config_fixtures;
mod properties;
mod scenarios;
