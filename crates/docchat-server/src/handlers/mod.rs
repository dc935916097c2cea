//! HTTP request handlers.

pub(crate) mod chat;
