//! # Repository Module
//!
//! Store implementations for the pricing engine.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stores Feeding the Resolver                          │
//! │                                                                         │
//! │  PricingService / seed binary                                          │
//! │       │                                                                 │
//! │       │  db.items().get_all()      db.campaigns().get_all()            │
//! │       ▼                                  ▼                              │
//! │  ItemRepository                    CampaignRepository                  │
//! │  ├── get_all / get_by_id           ├── get_all / get_by_id             │
//! │  ├── create / save                 ├── create / update / save          │
//! │  ├── delete_by_id                  ├── set_enabled                     │
//! │  └── count                         └── delete_by_id                    │
//! │       │                                  │                              │
//! │       └──────────────┬───────────────────┘                              │
//! │                      ▼                                                  │
//! │               SQLite Database                                          │
//! │                                                                         │
//! │  Snapshots come back in store order (rowid), which is the order the    │
//! │  selector uses to break ties.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`] - Catalog CRUD
//! - [`CampaignRepository`] - Campaign CRUD and activation

pub mod campaign;
pub mod item;

pub use campaign::CampaignRepository;
pub use item::ItemRepository;

use uuid::Uuid;

/// Generates a new record id.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
