use chained_collections::{Error, Stack};

#[test]
fn new_stack_is_empty() {
    let s: Stack<i32> = Stack::new();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.top(), Err(Error::Empty { op: "top" }));
}

#[test]
fn push_pop_top() {
    let mut s = Stack::new();
    s.push("a");
    s.push("b");
    assert_eq!(s.top(), Ok(&"b"));
    *s.top_mut().unwrap() = "B";
    assert_eq!(s.pop(), Ok("B"));
    assert_eq!(s.pop(), Ok("a"));
    assert_eq!(s.pop(), Err(Error::Empty { op: "pop" }));
}

#[test]
fn iteration_goes_top_to_bottom() {
    let s: Stack<i32> = (1..=3).collect();
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(s.iter().len(), 3);
}

#[test]
fn clone_is_deep_and_ordered() {
    let mut s: Stack<i32> = (1..=3).collect();
    let c = s.clone();
    s.pop().unwrap();
    s.push(99);
    assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![99, 2, 1]);
}

#[test]
fn take_leaves_source_empty() {
    let mut s: Stack<i32> = (1..=3).collect();
    let moved = std::mem::take(&mut s);
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(moved.len(), 3);
    assert_eq!(moved.top(), Ok(&3));
}

#[test]
fn clear_resets_len() {
    let mut s: Stack<i32> = (1..=10).collect();
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    s.push(1);
    assert_eq!(s.len(), 1);
}
