//! # Registrar Core
//!
//! Domain model and orchestration for a capacity-bounded, idempotent event
//! registration service. The service fronts an external hosted document
//! store: this crate owns the decision logic and failure semantics, while
//! the store and notifier are trait seams implemented elsewhere
//! (`registrar-store` for the REST clients, `registrar-testing` for doubles).
//!
//! # Flow
//!
//! ```text
//! POST /events/register
//!         │
//!         ▼
//! ┌──────────────────┐   validate → per-event admission lane
//! │   Registrar      │   ├─ Guard: duplicate? event exists? full?
//! │  (orchestrator)  │   ├─ create Registration   ← durability point
//! │                  │   ├─ Counter: count + 1    ← best effort
//! └──────────────────┘   └─ Notifier: confirm     ← best effort
//! ```
//!
//! Everything after the registration write is best effort: counter and
//! notifier failures are logged and swallowed, never surfaced to the caller.

#![forbid(unsafe_code)]

pub mod counter;
pub mod environment;
pub mod error;
pub mod guard;
pub mod notify;
pub mod policy;
pub mod registrar;
pub mod store;
pub mod types;

pub use counter::{CapacityCounter, CounterStatus};
pub use environment::{Clock, SystemClock};
pub use error::{NotifyError, RegistrationError, StoreError};
pub use guard::{Decision, RegistrationGuard};
pub use notify::{ConfirmationMessage, Notifier};
pub use policy::{AdminAction, AllowlistPolicy, AuthorizationPolicy};
pub use registrar::{NewRegistration, Registrar, Ticket};
pub use store::DocumentStore;
pub use types::{Event, EventId, EventSummary, Registration, TicketId, UserId};
