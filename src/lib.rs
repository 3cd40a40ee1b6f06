//! Workspace root. The functionality lives in the `crates/` members:
//! `tandem-crypto` (the TLS 1.2 cryptographic core) and `tandem-harness`
//! (the cross-implementation conformance suite).
