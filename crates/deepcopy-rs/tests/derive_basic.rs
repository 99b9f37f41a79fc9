#![cfg(feature = "derive")]
use deepcopy_rs::DeepCopy;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[derive(Debug, Clone, PartialEq, DeepCopy)]
struct Simple {
    text: String,
    value: i64,
}

#[test]
fn value_fields_are_equal() {
    let original = Simple {
        text: "hello".into(),
        value: 42,
    };
    let copy = original.copy();
    assert_eq!(copy.text, "hello");
    assert_eq!(copy.value, 42);
    assert_eq!(original, copy);
}

#[derive(Debug, PartialEq, DeepCopy)]
struct Inner {
    values: Vec<i32>,
}

#[derive(Debug, DeepCopy)]
struct Outer {
    name: String,
    inner: Rc<RefCell<Inner>>,
    boxed: Box<Inner>,
}

fn outer() -> Outer {
    Outer {
        name: "outer".into(),
        inner: Rc::new(RefCell::new(Inner {
            values: vec![1, 2, 3],
        })),
        boxed: Box::new(Inner { values: vec![4] }),
    }
}

#[test]
fn copy_is_a_distinct_object() {
    let original = outer();
    let copy = original.copy();
    assert!(!std::ptr::eq(&original, &copy));
    assert_eq!(copy.name, original.name);
}

#[test]
fn nested_copy_capable_fields_are_distinct() {
    let original = outer();
    let copy = original.copy();
    assert!(!Rc::ptr_eq(&original.inner, &copy.inner));
    assert!(!std::ptr::eq(&*original.boxed, &*copy.boxed));
    assert_eq!(*original.inner.borrow(), *copy.inner.borrow());
    assert_eq!(original.boxed, copy.boxed);
}

#[test]
fn mutating_the_copy_leaves_the_original_alone() {
    let original = outer();
    let mut copy = original.copy();
    copy.inner.borrow_mut().values.push(99);
    copy.boxed.values.clear();
    copy.name.push_str("-copy");

    assert_eq!(original.inner.borrow().values, vec![1, 2, 3]);
    assert_eq!(original.boxed.values, vec![4]);
    assert_eq!(original.name, "outer");
}

#[test]
fn trait_and_inherent_method_agree() {
    let original = outer();
    let via_trait = DeepCopy::deep_copy(&original);
    let via_fn = deepcopy_rs::deep_copy(&original);
    assert_eq!(via_trait.inner, original.copy().inner);
    assert!(!Rc::ptr_eq(&via_trait.inner, &via_fn.inner));
}

#[derive(DeepCopy)]
struct Strategies {
    #[deep_copy(clone)]
    shared: Rc<RefCell<Vec<u8>>>,
    #[deep_copy(with = reset_counter)]
    counter: u32,
    #[deep_copy(skip)]
    cache: HashMap<String, String>,
    owned: Rc<RefCell<Vec<u8>>>,
}

fn reset_counter(_: &u32) -> u32 {
    0
}

#[test]
fn field_strategies() {
    let mut cache = HashMap::new();
    cache.insert("key".to_string(), "value".to_string());
    let original = Strategies {
        shared: Rc::new(RefCell::new(vec![1])),
        counter: 17,
        cache,
        owned: Rc::new(RefCell::new(vec![2])),
    };
    let copy = original.copy();
    assert!(Rc::ptr_eq(&original.shared, &copy.shared));
    assert!(!Rc::ptr_eq(&original.owned, &copy.owned));
    assert_eq!(copy.counter, 0);
    assert!(copy.cache.is_empty());
}

#[derive(Debug, PartialEq, DeepCopy)]
struct Tree<T> {
    value: T,
    children: Vec<Tree<T>>,
}

#[test]
fn generic_struct() {
    let original = Tree {
        value: Rc::new(1),
        children: vec![Tree {
            value: Rc::new(2),
            children: Vec::new(),
        }],
    };
    let copy = original.copy();
    assert_eq!(original, copy);
    assert!(!Rc::ptr_eq(&original.value, &copy.value));
    assert!(!Rc::ptr_eq(
        &original.children[0].value,
        &copy.children[0].value
    ));
}

#[derive(Debug, PartialEq, DeepCopy)]
struct Marker;

#[test]
fn unit_struct() {
    assert_eq!(Marker.copy(), Marker);
}

#[derive(DeepCopy)]
#[deep_copy(method = duplicate, crate = deepcopy_rs)]
struct Renamed {
    label: &'static str,
}

#[test]
fn renamed_method() {
    let original = Renamed { label: "static" };
    assert_eq!(original.duplicate().label, "static");
    assert_eq!(original.deep_copy().label, "static");
}

#[derive(DeepCopy)]
#[deep_copy(bound = "")]
struct Handle<T> {
    #[deep_copy(clone)]
    value: Rc<T>,
}

struct NotCopyable;

#[test]
fn custom_bound() {
    let original = Handle {
        value: Rc::new(NotCopyable),
    };
    let copy = original.copy();
    assert!(Rc::ptr_eq(&original.value, &copy.value));
}
