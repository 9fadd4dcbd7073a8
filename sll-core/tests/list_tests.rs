//! 链表操作测试
//!
//! 按下标和按键的修改操作，以及每次修改后的计数一致性

mod common;
use common::{assert_consistent, build_by_adds, random_values, seeded};

use rand::Rng;
use sll_core::{List, ListError, Node};

// ===== 插入 =====

#[test]
fn test_insert_shifts_previous_occupant() {
    for index in 0..4 {
        let mut list: List = [10, 20, 30, 40].into_iter().collect();
        let previous = list.node_at_index(index).map(Node::data);

        list.insert(99, index).unwrap();

        assert_eq!(list.node_at_index(index).map(Node::data), Some(99));
        assert_eq!(list.node_at_index(index + 1).map(Node::data), previous);
        assert_eq!(list.length(), 5);
        assert_consistent(&list);
    }
}

#[test]
fn test_insert_zero_on_added_list() {
    let mut list = build_by_adds(&[5, 6, 7]);
    list.insert(99, 0).unwrap();
    assert_eq!(list.values(), vec![99, 7, 6, 5]);
}

#[test]
fn test_insert_at_count_is_rejected() {
    let mut list = build_by_adds(&[1, 2, 3]);
    let before = list.values();

    let err = list.insert(4, 3).unwrap_err();
    assert_eq!(err, ListError::IndexOutOfRange { index: 3, count: 3 });
    assert_eq!(list.values(), before);
    assert_eq!(list.length(), 3);
}

// ===== 移除 =====

#[test]
fn test_remove_last_by_index() {
    for len in 1..6 {
        let mut list: List = (0..len).collect();
        let node = list.remove_at_index(list.length() - 1).unwrap();
        assert_eq!(node.data(), len - 1);
        assert!(node.next().is_none());
        assert_eq!(list.values(), (0..len - 1).collect::<Vec<_>>());
        assert_consistent(&list);
    }
}

#[test]
fn test_remove_at_index_out_of_range_keeps_chain() {
    let mut list = build_by_adds(&[1, 2]);
    assert!(list.remove_at_index(2).is_err());
    assert!(list.remove_at_index(7).is_err());
    assert_eq!(list.values(), vec![2, 1]);
    assert_consistent(&list);
}

#[test]
fn test_remove_present_and_absent_key() {
    let mut list = build_by_adds(&[1, 2, 3]);

    assert!(list.remove(42).is_none());
    assert_eq!(list.length(), 3);

    let node = list.remove(2).unwrap();
    assert_eq!(node.data(), 2);
    assert_eq!(list.length(), 2);
    assert_eq!(list.values(), vec![3, 1]);
    assert_consistent(&list);
}

#[test]
fn test_remove_duplicates_one_at_a_time() {
    let mut list: List = [7, 1, 7, 7].into_iter().collect();
    list.remove(7).unwrap();
    assert_eq!(list.values(), vec![1, 7, 7]);
    list.remove(7).unwrap();
    assert_eq!(list.values(), vec![1, 7]);
    assert_consistent(&list);
}

#[test]
fn test_search_then_remove_same_node() {
    let mut list: List = [4, 8, 15, 16, 23, 42].into_iter().collect();
    for key in [15, 4, 42] {
        let found = list.search(key).unwrap() as *const Node;
        let removed = list.remove(key).unwrap();
        assert!(std::ptr::eq(&*removed, found));
        assert_consistent(&list);
    }
    assert_eq!(list.values(), vec![8, 16, 23]);
}

// ===== 计数一致性 =====

#[test]
fn test_random_mutations_keep_count_in_sync() {
    let mut rng = seeded(0x5ee1);
    let mut list = List::new();
    let mut model: Vec<i64> = Vec::new();

    for _ in 0..2_000 {
        match rng.gen_range(0..4) {
            0 => {
                let value = rng.gen_range(-20..=20);
                list.add(value);
                model.insert(0, value);
            }
            1 => {
                let value = rng.gen_range(-20..=20);
                let index = rng.gen_range(0..=model.len() + 1);
                let result = list.insert(value, index);
                if index < model.len() {
                    assert!(result.is_ok());
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            2 => {
                let key = rng.gen_range(-20..=20);
                let removed = list.remove(key).map(|node| node.data());
                match model.iter().position(|&v| v == key) {
                    Some(pos) => {
                        model.remove(pos);
                        assert_eq!(removed, Some(key));
                    }
                    None => assert!(removed.is_none()),
                }
            }
            _ => {
                let index = rng.gen_range(0..=model.len());
                let result = list.remove_at_index(index);
                if index < model.len() {
                    assert_eq!(result.map(|node| node.data()), Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
        }
        assert_consistent(&list);
        assert_eq!(list.values(), model);
    }
}

#[test]
fn test_deep_list_teardown() {
    let mut rng = seeded(7);
    let values = random_values(&mut rng, 500_000, -1_000..=1_000);
    let list: List = values.into_iter().collect();
    assert_eq!(list.length(), 500_000);
    drop(list);
}
