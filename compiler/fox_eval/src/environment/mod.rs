//! Environment for variable scoping in the interpreter.
//!
//! Uses a scope stack (not cloning) for scope management. Function calls
//! get a child environment whose stack starts at the shared global scope,
//! so a call body sees its parameters and the globals, never its caller's
//! locals. Scopes are only ever pushed: a call environment is dropped
//! whole when the call returns, taking its call scope with it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;

/// A single-threaded, reference-counted scope handle.
///
/// All scope allocations go through [`LocalScope::new`]. Not thread-safe:
/// the interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope<'ast> {
    /// Names are unique within a scope; redefining overwrites.
    bindings: FxHashMap<String, Value<'ast>>,
    /// `None` only for the global scope.
    parent: Option<LocalScope<Scope<'ast>>>,
}

impl<'ast> Scope<'ast> {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope<'ast>>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define a variable in this scope.
    #[inline]
    pub fn define(&mut self, name: String, value: Value<'ast>) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable here, then through the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }
}

/// Environment for the interpreter using a scope stack.
pub struct Environment<'ast> {
    /// Stack of scopes, with current scope at the top.
    scopes: Vec<LocalScope<Scope<'ast>>>,
    /// Global scope (always at the bottom).
    global: LocalScope<Scope<'ast>>,
}

impl<'ast> Environment<'ast> {
    /// Create a new environment with a global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new scope onto the stack.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope().clone();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    #[inline]
    fn current_scope(&self) -> &LocalScope<Scope<'ast>> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value<'ast>) {
        self.current_scope().borrow_mut().define(name.into(), value);
    }

    /// Look up a variable from the current scope outward to the global scope.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        self.current_scope().borrow().lookup(name)
    }

    /// Create a child environment for function calls.
    ///
    /// The child shares the global scope but has its own scope stack.
    #[must_use]
    pub fn child(&self) -> Self {
        let global = self.global.clone();
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
