//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (lot, spots) = factory::create_lot(&db).await?;
//!     let session = factory::create_active_session(&db, &user, &spots[0]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let (lot, spots) = factory::parking_lot::LotFactory::new(&db)
//!     .capacity(2)
//!     .rate_per_hour(10.0)
//!     .build()
//!     .await?;
//!
//! let admin = factory::user::UserFactory::new(&db).admin(true).build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `parking_lot` - Create lots together with their spots
//! - `parking_session` - Create active or completed sessions, keeping spots consistent
//! - `helpers` - ID generation and multi-entity shortcuts

pub mod helpers;
pub mod parking_lot;
pub mod parking_session;
pub mod user;

pub use helpers::create_parked_user;
pub use parking_lot::create_lot;
pub use parking_session::{create_active_session, create_completed_session};
pub use user::{create_admin, create_user};
