//! Re-entrancy detection for recursive record graphs.

use rustc_hash::FxHashSet;

use gqlmap_schema::TypeMode;

/// Record names currently being compiled on the active call path.
///
/// Finding a name already in the set means the record graph loops back on
/// itself; the compiler answers with a placeholder instead of recursing.
#[derive(Clone, Debug, Default)]
pub struct CycleGuard {
    in_progress: FxHashSet<String>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as in progress.
    ///
    /// Returns `false`, leaving the set unchanged, if `name` was already in
    /// progress.
    pub fn enter(&mut self, name: &str) -> bool {
        if self.in_progress.contains(name) {
            return false;
        }
        self.in_progress.insert(name.to_string());
        true
    }

    pub fn exit(&mut self, name: &str) {
        self.in_progress.remove(name);
    }

    pub fn is_in_progress(&self, name: &str) -> bool {
        self.in_progress.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.in_progress.is_empty()
    }

    pub fn clear(&mut self) {
        self.in_progress.clear();
    }
}

/// State of one root compile call.
///
/// Created per root call and dropped when it returns, so nothing leaks from
/// one build into the next.
#[derive(Debug)]
pub struct CompilationContext {
    mode: TypeMode,
    depth: usize,
    guard: CycleGuard,
}

impl CompilationContext {
    pub fn new(mode: TypeMode) -> Self {
        Self {
            mode,
            depth: 0,
            guard: CycleGuard::new(),
        }
    }

    pub fn mode(&self) -> TypeMode {
        self.mode
    }

    /// Number of records currently being compiled.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Start compiling `name`. Returns `false` if that would recurse.
    pub fn enter(&mut self, name: &str) -> bool {
        if !self.guard.enter(name) {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Finish compiling `name`. Returns `true` when this was the outermost
    /// record of the call tree.
    pub fn exit(&mut self, name: &str) -> bool {
        self.guard.exit(name);
        self.depth = self.depth.saturating_sub(1);
        self.depth == 0
    }

    /// Forget every in-progress mark. Called once the outermost record is
    /// done.
    pub fn reset(&mut self) {
        self.guard.clear();
        self.depth = 0;
    }

    pub fn guard(&self) -> &CycleGuard {
        &self.guard
    }
}

#[cfg(test)]
mod tests;
