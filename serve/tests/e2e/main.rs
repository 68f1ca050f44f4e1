//! End-to-end tests: real axum server on 127.0.0.1:0, reqwest client, mock generation.

mod common;

mod chat;
mod cors;
mod invalid_json;
mod pages;
mod upstream_failure;
