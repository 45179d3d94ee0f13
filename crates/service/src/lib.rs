//! Request/response layer for the nhdss signature schemes
//!
//! Transport-independent: callers hand in deserialized requests and get
//! serializable responses back. Session state lives in an injected
//! [`SessionStore`](nhdss_api::SessionStore); [`InMemorySessionStore`] is the
//! bundled implementation.

pub mod config;
pub mod contract;
pub mod service;
pub mod store;

pub use config::ServiceConfig;
pub use contract::{
    Diagnostics, DomainParams, ErrorResponse, GenerateKeysRequest, GenerateKeysResponse,
    IntermediateValues, PointData, PrivateKey, PublicKey, SignRequest, SignResponse,
    SignatureData, VerifyRequest, VerifyResponse,
};
pub use service::{DssService, SessionRecord};
pub use store::InMemorySessionStore;
