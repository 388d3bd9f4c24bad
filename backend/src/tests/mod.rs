mod common;
mod gatekeeper_test;
