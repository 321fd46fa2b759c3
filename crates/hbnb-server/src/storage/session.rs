//! Units of work
//!
//! A unit of work is one async scope, normally one HTTP request. The
//! database store keys its sessions by unit, so closing one unit never
//! touches changes staged by another.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

tokio::task_local! {
    static CURRENT: UnitId;
}

static NEXT_UNIT: AtomicU64 = AtomicU64::new(1);

/// Identifies a unit of work. Code running outside [`scope`] shares
/// [`UnitId::DETACHED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(u64);

impl UnitId {
    pub const DETACHED: UnitId = UnitId(0);

    /// The unit the calling task is running in.
    pub fn current() -> Self {
        CURRENT.try_with(|id| *id).unwrap_or(Self::DETACHED)
    }
}

/// Run `f` as a fresh unit of work.
pub async fn scope<F: Future>(f: F) -> F::Output {
    let id = UnitId(NEXT_UNIT.fetch_add(1, Ordering::Relaxed));
    CURRENT.scope(id, f).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outside_any_scope_is_detached() {
        assert_eq!(UnitId::current(), UnitId::DETACHED);
    }

    #[tokio::test]
    async fn test_each_scope_gets_its_own_unit() {
        let first = scope(async { UnitId::current() }).await;
        let second = scope(async { UnitId::current() }).await;

        assert_ne!(first, UnitId::DETACHED);
        assert_ne!(first, second);
        assert_eq!(UnitId::current(), UnitId::DETACHED);
    }

    #[tokio::test]
    async fn test_nested_scope_restores_outer_unit() {
        scope(async {
            let outer = UnitId::current();
            let inner = scope(async { UnitId::current() }).await;
            assert_ne!(inner, outer);
            assert_eq!(UnitId::current(), outer);
        })
        .await;
    }
}
