#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fleetlock_core::ReplyKind;
use fleetlock_gateway::locks::{LockBackend, MemoryLocks, Transition};

#[tokio::test]
async fn one_holder_per_group() {
    let locks = MemoryLocks::new();

    assert_eq!(locks.lock("g", "a").await.unwrap(), Transition::Changed);
    assert_eq!(locks.lock("g", "a").await.unwrap(), Transition::Unchanged);

    let err = locks.lock("g", "b").await.expect_err("held by a");
    assert_eq!(err.reply_kind(), ReplyKind::LockHeld);

    // Other groups are independent.
    assert_eq!(locks.lock("h", "b").await.unwrap(), Transition::Changed);
    assert_eq!(locks.holder("g").as_deref(), Some("a"));
}

#[tokio::test]
async fn unlock_only_releases_own_lock() {
    let locks = MemoryLocks::new();
    locks.lock("g", "a").await.unwrap();

    assert_eq!(locks.unlock("g", "b").await.unwrap(), Transition::Unchanged);
    assert_eq!(locks.holder("g").as_deref(), Some("a"));

    assert_eq!(locks.unlock("g", "a").await.unwrap(), Transition::Changed);
    assert_eq!(locks.holder("g"), None);
    assert_eq!(locks.unlock("g", "a").await.unwrap(), Transition::Unchanged);
}
