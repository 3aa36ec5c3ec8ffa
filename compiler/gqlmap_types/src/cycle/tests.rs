use super::*;

#[test]
fn reentry_is_refused() {
    let mut guard = CycleGuard::new();
    assert!(guard.enter("Node"));
    assert!(!guard.enter("Node"));
    assert!(guard.is_in_progress("Node"));

    guard.exit("Node");
    assert!(!guard.is_in_progress("Node"));
    assert!(guard.enter("Node"));
}

#[test]
fn clear_forgets_everything() {
    let mut guard = CycleGuard::new();
    guard.enter("A");
    guard.enter("B");
    guard.clear();
    assert!(guard.is_empty());
}

#[test]
fn context_tracks_depth() {
    let mut ctx = CompilationContext::new(TypeMode::Input);
    assert_eq!(ctx.mode(), TypeMode::Input);

    assert!(ctx.enter("Parent"));
    assert!(ctx.enter("Child"));
    assert!(!ctx.enter("Parent"));
    assert_eq!(ctx.depth(), 2);

    assert!(!ctx.exit("Child"));
    assert!(ctx.exit("Parent"));
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn refused_entry_does_not_change_depth() {
    let mut ctx = CompilationContext::new(TypeMode::Output);
    ctx.enter("Node");
    ctx.enter("Node");
    assert_eq!(ctx.depth(), 1);

    ctx.reset();
    assert!(ctx.guard().is_empty());
    assert_eq!(ctx.depth(), 0);
}
