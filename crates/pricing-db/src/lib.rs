//! # pricing-db: Storage Layer for Campaign Pricing
//!
//! This crate stores items and campaigns in SQLite (via sqlx) and feeds
//! snapshots of them to the pure resolver in `pricing-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Data Flow                                │
//! │                                                                         │
//! │  Caller (seed binary, HTTP layer, ...) decides "today"                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pricing-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐ │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │◄───│ ItemRepo       │    │ 001_init.sql │ │   │
//! │  │   │  SqlitePool   │    │ CampaignRepo   │    │  (embedded)  │ │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘ │   │
//! │  │            ▲                                                    │   │
//! │  │            │  snapshots                                         │   │
//! │  │   ┌───────────────────┐                                         │   │
//! │  │   │  PricingService   │──▶ pricing_core::PriceResolver          │   │
//! │  │   └───────────────────┘                                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (PRICING_DB_PATH, default ./pricing_dev.db)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Item and campaign stores
//! - [`service`] - Fetch-then-resolve pricing
//! - [`config`] - Environment and flag configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pricing_db::{Database, DbConfig, PricingService};
//!
//! let db = Database::new(DbConfig::new("pricing.db")).await?;
//! let catalog = PricingService::new(db).price_catalog(today).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, PricingConfig};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use service::PricingService;

// Repository re-exports for convenience
pub use repository::campaign::CampaignRepository;
pub use repository::item::ItemRepository;
