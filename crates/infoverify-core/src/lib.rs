//! Core domain for InfoVerify: configuration, local storage, the session
//! context, credential validation, and the document intake model.

pub mod config;
pub mod credentials;
pub mod documents;
pub mod logging;
pub mod processing;
pub mod session;
pub mod storage;
