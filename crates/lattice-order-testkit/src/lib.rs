//! # Lattice Order Testkit
//!
//! Testing utilities for lattice-order.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: [`LatticeFixture`] grows per-account chains without
//!   hand-wiring `previous` references
//! - **Scenarios**: named, deterministic graphs and lattices shared
//!   across test suites
//! - **Generators**: proptest strategies for random acyclic lattices
//!
//! ## Fixtures
//!
//! ```rust
//! use lattice_order_testkit::LatticeFixture;
//!
//! let mut fx = LatticeFixture::new();
//! let genesis = fx.account();
//! fx.open(genesis);
//! let other = fx.account();
//! let send = fx.send(genesis, other);
//! fx.open_funded(other, send);
//! assert_eq!(fx.blocks().len(), 3);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use lattice_order_testkit::generators::lattice;
//!
//! proptest! {
//!     #[test]
//!     fn ordering_is_complete(blocks in lattice(40)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod scenarios;

pub use fixtures::LatticeFixture;
pub use generators::lattice;
