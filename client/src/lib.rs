//! SynergyFit Insights Client Library
//!
//! Client-side orchestration for the SynergyFit analysis service:
//! - Stores: staged input files and user preferences
//! - Gateway: the single multipart submission to `POST /analyze`
//! - Controller: the Idle → Loading → Succeeded/Failed request lifecycle
//! - View model: the four renderable sections projected from a result

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod stores;
pub mod view_model;
