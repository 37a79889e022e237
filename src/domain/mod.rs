//! Domain Layer
//!
//! Pure stack deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Template, stack state, events, requests
//! - `value_objects/` - Immutable value types (StackStatus, Capability, overrides)
//! - `services/` - Reconciler, request builder, event tail
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
