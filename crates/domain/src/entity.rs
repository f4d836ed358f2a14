//! Uniform entity contract used by the repository ports

use chrono::{DateTime, Utc};

/// An entity stored in one of the four collections.
///
/// Repositories are generic over this trait so that every collection shares
/// the same CRUD surface. `Draft` is what callers submit on create, `Patch`
/// carries a partial update.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Fields required to create the entity; the store assigns the id.
    type Draft: Send + 'static;
    /// Partial update; `None` fields are left untouched.
    type Patch: Send + 'static;

    /// Human-readable collection name used in errors and log fields.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Build the stored entity from a draft. `generated_id` is the id the
    /// store minted; entities whose id is chosen by the caller ignore it.
    fn from_draft(generated_id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Restore collection-wide invariants after `items[touched]` was inserted
    /// or updated. Runs inside the store's write section.
    fn reconcile(items: &mut [Self], touched: usize) {
        let _ = (items, touched);
    }
}
