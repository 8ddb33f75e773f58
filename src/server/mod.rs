//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the hostel administration service:
//! JSON endpoints, business rules, data access and startup wiring. The backend uses Axum
//! as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and orchestration of repositories
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Database connection, migrations and admin seeding
//! - **Router** (`router`) - Axum route table
//! - **Doc** (`doc`) - OpenAPI document
//! - **Util** (`util/`) - JSON extraction and field validation helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the body, converts the DTO to params (validating required
//!    fields) and calls a service
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
