//! Tests for the tap client.

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod services_tests;
