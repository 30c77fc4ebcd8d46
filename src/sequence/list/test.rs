/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::*;
use pretty_assertions::assert_eq;
use static_assertions::assert_impl_all;

assert_impl_all!(List<i32>: Send, Sync, Clone);

mod iter {
    use super::*;
    use pretty_assertions::assert_eq;

    #[allow(clippy::explicit_iter_loop)]
    #[test]
    fn test_iter() {
        let limit = 1024;
        let mut list = List::new();
        let mut expected = 0;

        for i in 0..limit {
            list.push_back(i);
        }

        for v in list.iter() {
            assert_eq!(*v, expected);
            expected += 1;
        }

        assert_eq!(expected, limit);
    }

    #[test]
    fn test_iter_size_hint() {
        let list = list![0, 1, 2];
        let mut iterator = list.iter();

        assert_eq!(iterator.size_hint(), (3, Some(3)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (2, Some(2)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (1, Some(1)));

        iterator.next();

        assert_eq!(iterator.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_has_next() {
        let list = list!['a', 'b'];
        let mut cursor = list.iter();

        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some(&'a'));
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some(&'b'));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_has_next_empty() {
        let list: List<i32> = List::new();

        assert!(!list.iter().has_next());
    }

    #[test]
    fn test_into_iterator() {
        let list = list![0, 1, 2, 3];
        let mut left = 4;

        for (expected, n) in list.into_iter().enumerate() {
            left -= 1;

            assert_eq!(*n, expected);
        }

        assert_eq!(left, 0);
    }
}

#[test]
fn test_new() {
    let empty_list: List<i32> = List::new();

    assert!(empty_list.head.is_none());

    assert_eq!(empty_list.len(), 0);
    assert!(empty_list.is_empty());
}

#[test]
fn test_macro_list() {
    let mut list_1 = List::new();
    list_1.push_back(1);

    let mut list_1_2_3 = List::new();
    list_1_2_3.push_back(1);
    list_1_2_3.push_back(2);
    list_1_2_3.push_back(3);

    assert_eq!(List::<u32>::new(), list![]);
    assert_eq!(list_1, list![1]);
    assert_eq!(list_1_2_3, list![1, 2, 3]);
}

#[test]
fn test_first() {
    let empty_list: List<i32> = List::new();
    let singleton_list = list!["hello"];
    let list = list![0, 1, 2, 3];

    assert_eq!(empty_list.first(), None);
    assert_eq!(singleton_list.first(), Some(&"hello"));
    assert_eq!(list.first(), Some(&0));
}

#[test]
fn test_last() {
    let empty_list: List<i32> = List::new();
    let singleton_list = list!["hello"];
    let list = list![0, 1, 2, 3];

    assert_eq!(empty_list.last(), None);
    assert_eq!(singleton_list.last(), Some(&"hello"));
    assert_eq!(list.last(), Some(&3));
}

#[test]
fn test_get() {
    let list = list!['a', 'b', 'c'];

    assert_eq!(list.get(0), Ok(&'a'));
    assert_eq!(list.get(2), Ok(&'c'));
    assert_eq!(list.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(List::<char>::new().get(0), Err(Error::IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_push_front() {
    let mut list = List::new();

    list.push_front(2);
    list.push_front(1);
    list.push_front(0);

    assert_eq!(list, list![0, 1, 2]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_push_back() {
    let mut list = List::new();

    list.push_back("a");
    assert_eq!(list.first(), Some(&"a"));
    assert_eq!(list.last(), Some(&"a"));

    list.push_back("b");
    list.push_back("c");

    assert_eq!(list, list!["a", "b", "c"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_at() {
    let mut list = list![1, 3];

    assert_eq!(list.insert_at(1, 2), Ok(()));
    assert_eq!(list, list![1, 2, 3]);

    assert_eq!(list.insert_at(0, 0), Ok(()));
    assert_eq!(list, list![0, 1, 2, 3]);
    assert_eq!(list.len(), 4);

    assert_eq!(list.insert_at(4, 4), Err(Error::IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list, list![0, 1, 2, 3]);

    let mut empty_list: List<i32> = List::new();

    assert_eq!(empty_list.insert_at(0, 0), Err(Error::IndexOutOfBounds { index: 0, len: 0 }));
    assert!(empty_list.is_empty());
}

#[test]
fn test_pop_front() {
    let mut list = list![0, 1];

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.len(), 1);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_remove_first() {
    let list_a_b_c = list!['a', 'b', 'c'];

    let mut list = list_a_b_c.clone();
    assert_eq!(list.remove_first(|_| false), None);
    assert_eq!(list, list_a_b_c);

    let mut list = list_a_b_c.clone();
    assert_eq!(list.remove_first(|c| *c == 'a'), Some('a'));
    assert_eq!(list, list!['b', 'c']);

    let mut list = list_a_b_c.clone();
    assert_eq!(list.remove_first(|c| *c == 'b'), Some('b'));
    assert_eq!(list, list!['a', 'c']);

    let mut list = list_a_b_c.clone();
    assert_eq!(list.remove_first(|c| *c == 'c'), Some('c'));
    assert_eq!(list, list!['a', 'b']);
    assert_eq!(list.last(), Some(&'b'));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_first_only_removes_one() {
    let mut list = list![1, 2, 1, 2];

    assert_eq!(list.remove_first(|v| *v == 2), Some(2));
    assert_eq!(list, list![1, 1, 2]);

    list.push_back(3);

    assert_eq!(list, list![1, 1, 2, 3]);
}

#[test]
fn test_find_first() {
    let list = list![(0, 'a'), (1, 'b'), (1, 'c')];

    assert_eq!(list.find_first(|(k, _)| *k == 1), Some(&(1, 'b')));
    assert_eq!(list.find_first(|(k, _)| *k == 2), None);
    assert_eq!(List::<i32>::new().find_first(|_| true), None);
}

#[test]
fn test_find_first_mut() {
    let mut list = list![(0, 'a'), (1, 'b'), (1, 'c')];

    if let Some(entry) = list.find_first_mut(|(k, _)| *k == 1) {
        entry.1 = 'z';
    }

    assert_eq!(list, list![(0, 'a'), (1, 'z'), (1, 'c')]);
    assert_eq!(list.find_first_mut(|(k, _)| *k == 7), None);
}

#[test]
fn test_clear() {
    let mut list = list![0, 1, 2];

    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.first(), None);

    list.push_back(7);

    assert_eq!(list, list![7]);
}

#[test]
fn test_from_iterator() {
    let vec: Vec<u32> = vec![10, 11, 12, 13];
    let list: List<u32> = vec.iter().copied().collect();

    assert!(vec.iter().eq(list.iter()));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_default() {
    let list: List<i32> = List::default();

    assert_eq!(list.first(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_display() {
    let empty_list: List<i32> = List::new();
    let singleton_list = list!["hello"];
    let list = list![0, 1, 2, 3];

    assert_eq!(format!("{}", empty_list), "[]");
    assert_eq!(format!("{}", singleton_list), "[hello]");
    assert_eq!(format!("{}", list), "[0, 1, 2, 3]");
}

#[test]
fn test_eq() {
    let list_1 = list!["a", "a"];
    let list_1_prime = list!["a", "a"];
    let list_2 = list!["a", "b"];
    let list_3 = list!["a"];

    assert_ne!(list_1, list_2);
    assert_ne!(list_1, list_3);
    assert_eq!(list_1, list_1);
    assert_eq!(list_1, list_1_prime);
    assert_eq!(list_2, list_2);
}

#[test]
fn test_clone() {
    let list = list!["hello", "there"];
    let mut clone = list.clone();

    assert!(clone.iter().eq(list.iter()));
    assert_eq!(clone.len(), list.len());
    assert_eq!(clone.last(), list.last());

    clone.push_back("again");

    assert_eq!(list.len(), 2);
    assert_eq!(clone.len(), 3);
}

#[test]
fn test_drop_large() {
    let limit = 1_000_000;
    let mut list = List::new();

    for i in 0..limit {
        list.push_front(i);
    }

    assert_eq!(list.len(), limit);
}
