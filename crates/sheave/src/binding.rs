use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Observable value cell backing the sheet's two-way bindings.
///
/// The coordinator and the outside view layer hold clones of the same cell;
/// every write, internal or external, notifies all subscribers. Subscribers
/// run after the cell's borrow is released, so a subscriber may read or
/// write bindings (including this one) without tripping a borrow panic.
#[derive(Clone)]
pub struct Binding<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: Vec<(SubId, Rc<dyn Fn(&T)>)>,
}

impl<T: Clone + 'static> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        self.0.borrow_mut().value = value;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_sub;
        inner.next_sub += 1;
        inner.subs.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.borrow_mut().subs.retain(|(sub, _)| *sub != id);
    }

    fn notify(&self) {
        // Snapshot value and subscribers so callbacks run unborrowed.
        let (value, subs): (T, Vec<Rc<dyn Fn(&T)>>) = {
            let inner = self.0.borrow();
            (
                inner.value.clone(),
                inner.subs.iter().map(|(_, f)| f.clone()).collect(),
            )
        };
        for sub in subs {
            sub(&value);
        }
    }
}

pub fn binding<T: Clone + 'static>(value: T) -> Binding<T> {
    Binding::new(value)
}
