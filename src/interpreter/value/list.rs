use std::{cell::{Ref, RefCell},
          rc::Rc};

use crate::interpreter::value::core::Value;

/// A handle to one shared, mutable list body.
///
/// Cloning a `ListRef` clones the handle, not the body: every clone aliases
/// the same storage, and mutations through any handle are visible through all
/// of them. Fresh bodies are minted only by list literals, replication,
/// concatenation and `append`; the body is reclaimed when the last handle is
/// dropped.
///
/// # Example
/// ```
/// use step::interpreter::value::{core::Value, list::ListRef};
///
/// let a = ListRef::new(vec![Value::Integer(1)]);
/// let b = a.clone();
/// b.set(0, Value::Integer(9));
///
/// assert!(matches!(a.get(0), Some(Value::Integer(9))));
/// ```
#[derive(Debug, Clone)]
pub struct ListRef {
    body: Rc<RefCell<Vec<Value>>>,
}

impl ListRef {
    /// Creates a fresh list body holding `items`.
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        Self { body: Rc::new(RefCell::new(items)), }
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.borrow().len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.borrow().is_empty()
    }

    /// Returns a copy of the element at `index`, or `None` when out of range.
    /// Copying a value copies handles, not bodies, so nested lists stay
    /// shared.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.body.borrow().get(index).cloned()
    }

    /// Overwrites the element at `index` through the shared body.
    ///
    /// # Panics
    /// Panics if `index` is out of range; callers bounds-check against
    /// [`Self::len`] first.
    pub fn set(&self, index: usize, value: Value) {
        self.body.borrow_mut()[index] = value;
    }

    /// Appends `value` to the shared body.
    pub fn push(&self, value: Value) {
        self.body.borrow_mut().push(value);
    }

    /// Returns a fresh list holding the elements of `self` followed by the
    /// elements of `other`. Element handles are shared, the new top-level body
    /// is not.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut items = self.body.borrow().clone();
        items.extend(other.body.borrow().iter().cloned());
        Self::new(items)
    }

    /// Returns a fresh list holding the elements of `self` repeated `count`
    /// times. Element handles are shared, the new top-level body is not.
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        let items = self.body.borrow();
        let mut repeated = Vec::with_capacity(items.len() * count);
        for _ in 0..count {
            repeated.extend(items.iter().cloned());
        }
        Self::new(repeated)
    }

    /// Immutably borrows the element vector, for iteration during equality
    /// checks and rendering.
    #[must_use]
    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.body.borrow()
    }

    /// Returns `true` when both handles alias the same list body.
    #[must_use]
    pub fn shares_body(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}
