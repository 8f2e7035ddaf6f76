use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::ErrorKind,
    interpreter::{evaluator::core::EvalResult, object::core::Object, value::core::Value},
    util::num::i64_to_usize_checked,
};

/// A shared, growable list of values.
///
/// Arrays are created by comma lists (`1, 2, 3`) and by the list built-ins.
/// Handles are shared: `add(a, x)` appends to the same list `a` refers to.
#[derive(Debug, Clone, Default)]
pub struct Array {
    items: Rc<RefCell<Vec<Value>>>,
}

impl Array {
    /// Creates an array owning `items`.
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        Self { items: Rc::new(RefCell::new(items)) }
    }

    /// Wraps a value as an array: arrays are shared as they are, `empty`
    /// becomes an empty array and anything else a one-element array.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(Object::Array(array)) => array.clone(),
            Value::Empty => Self::default(),
            other => Self::new(vec![other.clone()]),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Copies the elements out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }

    /// Appends an element.
    pub fn push(&self, value: Value) {
        self.items.borrow_mut().push(value);
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    /// `InvalidArgument` if the position is past the end.
    pub fn remove(&self, position: usize) -> EvalResult<Value> {
        let mut items = self.items.borrow_mut();
        if position >= items.len() {
            return Err(ErrorKind::InvalidArgument);
        }
        Ok(items.remove(position))
    }

    /// The array's value: `empty` when it has no elements, the element itself
    /// when it has one, otherwise the array.
    #[must_use]
    pub fn get(&self) -> Value {
        let items = self.items.borrow();
        match items.as_slice() {
            [] => Value::Empty,
            [single] => single.clone(),
            _ => self.clone().into(),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// `InvalidArgument` unless `index` is an integer within bounds.
    pub fn index(&self, index: &Value) -> EvalResult<Value> {
        let Value::Int(index) = index else {
            return Err(ErrorKind::InvalidArgument);
        };
        let position = i64_to_usize_checked(*index)?;
        if position >= self.len() {
            return Err(ErrorKind::InvalidArgument);
        }
        Ok(Object::Indexer(Indexer { array: self.clone(),
                                     position })
           .into())
    }

    /// Returns `true` if both handles share one list.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

thread_local! {
    static PRINTING: RefCell<Vec<Array>> = const { RefCell::new(Vec::new()) };
}

/// Arrays nested deeper than this print as `[...]`.
const MAX_PRINT_DEPTH: usize = 64;

impl fmt::Display for Array {
    /// Prints `[a; b; c]`. An array that is already being printed, directly
    /// or through other arrays, prints as `[...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = PRINTING.with(|printing| {
                               let printing = printing.borrow();
                               printing.len() >= MAX_PRINT_DEPTH
                               || printing.iter().any(|array| array.ptr_eq(self))
                           });
        if open {
            return write!(f, "[...]");
        }

        PRINTING.with(|printing| printing.borrow_mut().push(self.clone()));
        let result = self.write_items(f);
        PRINTING.with(|printing| {
                     printing.borrow_mut().pop();
                 });
        result
    }
}

impl Array {
    fn write_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.to_vec().iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

/// A reference to one slot of an array.
///
/// Reading dereferences the slot; assigning writes into the shared list.
#[derive(Debug, Clone)]
pub struct Indexer {
    array:    Array,
    position: usize,
}

impl Indexer {
    /// Reads the referenced element.
    ///
    /// # Errors
    /// `InvalidArgument` if the array shrank below the position.
    pub fn get(&self) -> EvalResult<Value> {
        self.array
            .items
            .borrow()
            .get(self.position)
            .cloned()
            .ok_or(ErrorKind::InvalidArgument)
    }

    /// Writes the referenced element and returns the written value.
    ///
    /// # Errors
    /// `InvalidArgument` if the array shrank below the position.
    pub fn set(&self, value: Value) -> EvalResult<Value> {
        let mut items = self.array.items.borrow_mut();
        let slot = items.get_mut(self.position)
                        .ok_or(ErrorKind::InvalidArgument)?;
        *slot = value.clone();
        Ok(value)
    }

    /// The object stored in the slot, for operations forwarded to it.
    ///
    /// # Errors
    /// `TypeMismatch` if the slot holds a scalar.
    pub fn element_object(&self) -> EvalResult<Object> {
        match self.get()? {
            Value::Object(object) => Ok(object),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Indexes the element. A scalar element accepts index `0` and yields
    /// this reference.
    ///
    /// # Errors
    /// `InvalidArgument` for any other index on a scalar element.
    pub fn index(&self, index: &Value) -> EvalResult<Value> {
        match self.get()? {
            Value::Object(object) => object.index(index),
            _ if *index == Value::Int(0) => Ok(Object::Indexer(self.clone()).into()),
            _ => Err(ErrorKind::InvalidArgument),
        }
    }

    /// Returns `true` if both reference the same slot of the same list.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.array.ptr_eq(&other.array) && self.position == other.position
    }
}
