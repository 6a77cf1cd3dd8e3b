//! Observation extension over the managed-object write path.
//!
//! `set` is the single choke point every field mutation passes
//! through, so observing it is enough to observe all state changes.
//! Observers are registered per instance and notified synchronously,
//! after the value has been committed. Reads never notify.

use crate::{
    factory::ObjectBuilder,
    object::{MObject, ObjectError},
    value::Value,
};
use mdata_schema::node::Klass;
use std::{cell::RefCell, rc::Rc};

///
/// Observer
///

pub trait Observer {
    fn on_set(&self, object: &MObject, field: &str, value: &Value);
}

///
/// Observable
///
/// Wraps a managed object and relays every successful write to the
/// registered observers. Cloned handles share the observer list.
///

#[derive(Clone)]
pub struct Observable {
    inner: Rc<Inner>,
}

struct Inner {
    object: MObject,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

impl Observable {
    #[must_use]
    pub fn new(object: MObject) -> Self {
        Self {
            inner: Rc::new(Inner {
                object,
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register an observer for this instance.
    pub fn observe(&self, observer: Rc<dyn Observer>) {
        self.inner.observers.borrow_mut().push(observer);
    }

    #[must_use]
    pub fn object(&self) -> &MObject {
        &self.inner.object
    }

    pub fn get(&self, field: &str) -> Result<Value, ObjectError> {
        self.inner.object.get(field)
    }

    /// Write one field, then notify every observer with the committed
    /// value. A failed write notifies no one.
    pub fn set(&self, field: &str, value: Value) -> Result<(), ObjectError> {
        self.inner.object.set(field, value.clone())?;

        for observer in self.inner.observers.borrow().iter() {
            observer.on_set(&self.inner.object, field, &value);
        }

        Ok(())
    }
}

///
/// ObservableBuilder
///
/// Plugs observation into the factory: built instances come wrapped
/// and ready for registration.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ObservableBuilder;

impl ObjectBuilder for ObservableBuilder {
    type Object = Observable;

    fn create(&self, klass: &Klass, inits: &[Value]) -> Observable {
        Observable::new(MObject::with_inits(klass, inits))
    }
}
