use chained_collections::{Error, LinkedList};

fn to_vec(l: &LinkedList<i32>) -> Vec<i32> {
    l.iter().copied().collect()
}

#[test]
fn push_and_pop_at_both_ends() {
    let mut l = LinkedList::new();
    l.push_back(2);
    l.push_front(1);
    l.push_back(3);
    assert_eq!(to_vec(&l), vec![1, 2, 3]);
    assert_eq!(l.pop_front(), Ok(1));
    assert_eq!(l.pop_back(), Ok(3));
    assert_eq!(l.pop_back(), Ok(2));
    assert!(l.is_empty());
}

#[test]
fn empty_list_operations_fail() {
    let mut l: LinkedList<i32> = LinkedList::new();
    assert_eq!(l.front(), Err(Error::Empty { op: "front" }));
    assert_eq!(l.back(), Err(Error::Empty { op: "back" }));
    assert!(l.pop_front().is_err());
    assert!(l.pop_back().is_err());
}

#[test]
fn clone_is_deep() {
    let mut l: LinkedList<i32> = (1..=3).collect();
    let c = l.clone();
    *l.back_mut().unwrap() = 30;
    l.push_back(4);
    assert_eq!(to_vec(&c), vec![1, 2, 3]);
    assert_eq!(to_vec(&l), vec![1, 2, 30, 4]);
}

#[test]
fn take_leaves_source_empty() {
    let mut l: LinkedList<i32> = (1..=3).collect();
    let moved = std::mem::take(&mut l);
    assert!(l.is_empty());
    assert_eq!(to_vec(&moved), vec![1, 2, 3]);
}

#[test]
fn clear_then_reuse() {
    let mut l: LinkedList<i32> = (1..=3).collect();
    l.clear();
    assert_eq!(l.len(), 0);
    l.push_front(5);
    assert_eq!(l.front(), Ok(&5));
    assert_eq!(l.back(), Ok(&5));
}

#[test]
fn owning_iteration() {
    let l: LinkedList<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(l.into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
}
