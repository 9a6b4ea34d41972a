//! Common test utilities and helper modules
