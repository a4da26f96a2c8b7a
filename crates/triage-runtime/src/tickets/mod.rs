//! Ticket repository.
//!
//! [`TicketStore`] owns every ticket and the id counter behind one mutex.
//! Callers get clones, never references into the backing collection. Key
//! business rules:
//!
//! - **Ids**: allocated only after validation passes, starting at 1, never reused.
//! - **Timestamps**: `created_at == updated_at` at creation; every status
//!   change refreshes `updated_at`, which never moves before `created_at`.
//! - **Status**: free-form; any status may follow any status.
//! - **Open queue**: every ticket whose status is not `CLOSED`, in creation order.
//! - **Activity**: each success and failure is appended to the [`ActivityLog`].
//!
//! [`ActivityLog`]: crate::activity::ActivityLog

mod health;
mod seed;
mod store;

pub use health::{HealthSnapshot, MemoryStatus, ServiceStatus};
pub use store::TicketStore;
