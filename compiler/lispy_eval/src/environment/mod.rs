//! Binding tables for symbol lookup.
//!
//! An [`Environment`] is a shared handle to a [`Scope`]. Scopes link to their
//! parent, so lookup walks outward until the root. Closures hold a detached
//! `Scope` of their own and are linked to the calling environment only while
//! their body runs.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::unbound_symbol;
use crate::Value;

/// A single-threaded, reference-counted, interiorly mutable cell.
///
/// All scope allocations go through [`LocalScope::new`]. Not thread-safe.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single table of bindings with an optional parent.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: Environment) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Copy of the binding in this scope only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Copy of the nearest binding, searching parents.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(env) = next {
            let scope = env.scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }

    pub fn set_parent(&mut self, parent: Option<Environment>) {
        self.parent = parent;
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// Parents are shown by presence only; printing them would dump the whole chain.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        f.debug_struct("Scope")
            .field("bindings", &bindings)
            .field("has_parent", &self.has_parent())
            .finish()
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

/// A shared handle to a scope.
///
/// Cloning the handle shares the scope; [`Environment::deep_copy`] copies it.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root environment with no bindings.
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn from_scope(scope: Scope) -> Self {
        Environment {
            scope: LocalScope::new(scope),
        }
    }

    /// A new, empty environment whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment::from_scope(Scope::with_parent(self.clone()))
    }

    /// Value bound to `name`, or an error value if it is unbound anywhere
    /// along the chain.
    pub fn lookup(&self, name: &str) -> Value {
        self.scope
            .borrow()
            .lookup(name)
            .unwrap_or_else(|| unbound_symbol(name).into())
    }

    /// Bind in the innermost scope.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Bind in the root scope of the chain.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.root().define(name, value);
    }

    /// Outermost environment of the chain.
    pub fn root(&self) -> Environment {
        let mut current = self.clone();
        loop {
            let parent = current.scope.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// An independent environment with copies of this scope's bindings and
    /// the same parent.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Environment::from_scope(self.snapshot())
    }

    /// Copy of the innermost scope.
    pub fn snapshot(&self) -> Scope {
        self.scope.borrow().clone()
    }

    /// Bindings of the innermost scope, sorted by name.
    pub fn bindings(&self) -> Vec<(String, Value)> {
        let scope = self.scope.borrow();
        let mut bindings: Vec<_> = scope
            .bindings
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        bindings
    }

}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment")
            .field(&*self.scope.borrow())
            .finish()
    }
}
