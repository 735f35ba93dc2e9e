//! Application layer - DTOs, ports and services

pub mod dto;
pub mod ports;
pub mod services;
