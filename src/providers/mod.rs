//! Providers Module - External Service Clients

pub mod gateway;

pub use gateway::{GatewayClient, TOOL_NAME};
