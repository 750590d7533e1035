use dynvec::{DynVec, DynVecError};

fn int_vec(values: &[i32]) -> DynVec {
    let mut vec = DynVec::new(4).unwrap();
    for value in values {
        vec.push_back(&value.to_le_bytes()).unwrap();
    }
    vec
}

fn ints(vec: &DynVec) -> Vec<i32> {
    vec.as_bytes()
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

#[test]
fn test_initialization() {
    let vec = DynVec::new(4).unwrap();

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
    assert_eq!(vec.element_width(), 4);
    assert!(vec.as_bytes().is_empty());
}

#[test]
fn test_push_and_get_integers() {
    let vec = int_vec(&[1, 2, 3, 4, 5]);

    assert_eq!(vec.len(), 5);
    assert_eq!(vec.get(2).unwrap(), &3i32.to_le_bytes());
    assert_eq!(ints(&vec), [1, 2, 3, 4, 5]);
}

#[test]
fn test_delete_first_element() {
    let mut vec = int_vec(&[1, 2, 3, 4, 5]);

    vec.delete_at(0).unwrap();

    assert_eq!(vec.len(), 4);
    assert_eq!(ints(&vec), [2, 3, 4, 5]);
}

#[test]
fn test_delete_middle_and_last() {
    let mut vec = int_vec(&[10, 20, 30, 40]);

    vec.delete_at(1).unwrap();
    assert_eq!(ints(&vec), [10, 30, 40]);

    vec.delete_at(2).unwrap();
    assert_eq!(ints(&vec), [10, 30]);
}

#[test]
fn test_insert_at_front_middle_end() {
    let mut vec = int_vec(&[2, 4]);

    vec.insert_at(0, &1i32.to_le_bytes()).unwrap();
    assert_eq!(ints(&vec), [1, 2, 4]);

    vec.insert_at(2, &3i32.to_le_bytes()).unwrap();
    assert_eq!(ints(&vec), [1, 2, 3, 4]);

    vec.insert_at(4, &5i32.to_le_bytes()).unwrap();
    assert_eq!(ints(&vec), [1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut vec = int_vec(&[7, 8, 9]);

    vec.insert_at(3, &10i32.to_le_bytes()).unwrap();

    assert_eq!(vec.len(), 4);
    assert_eq!(vec.top(), Some(&10i32.to_le_bytes()[..]));
}

#[test]
fn test_insert_into_empty() {
    let mut vec = DynVec::new(2).unwrap();

    vec.insert_at(0, b"hi").unwrap();

    assert_eq!(vec.len(), 1);
    assert_eq!(vec.get(0).unwrap(), b"hi");
}

#[test]
fn test_set_and_get_mut() {
    let mut vec = int_vec(&[1, 2, 3]);

    vec.set(1, &20i32.to_le_bytes()).unwrap();
    vec.get_mut(2).unwrap().copy_from_slice(&30i32.to_le_bytes());

    assert_eq!(ints(&vec), [1, 20, 30]);
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_resize_truncates_and_keeps_capacity() {
    let mut vec = int_vec(&[1, 2, 3, 4, 5]);
    let capacity = vec.capacity();

    vec.resize(2).unwrap();

    assert_eq!(ints(&vec), [1, 2]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_resize_grows_exposing_writable_slots() {
    let mut vec = int_vec(&[1, 2]);

    vec.resize(5).unwrap();
    assert_eq!(vec.len(), 5);
    assert!(vec.capacity() >= 5);
    assert_eq!(ints(&vec)[..2], [1, 2]);

    for index in 2..5 {
        let value = i32::try_from(index).unwrap() + 1;
        vec.set(index, &value.to_le_bytes()).unwrap();
    }
    assert_eq!(ints(&vec), [1, 2, 3, 4, 5]);
}

#[test]
fn test_resize_to_same_length_is_noop() {
    let mut vec = int_vec(&[1, 2, 3]);
    let capacity = vec.capacity();

    vec.resize(3).unwrap();

    assert_eq!(ints(&vec), [1, 2, 3]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_clear_resets_to_fresh_state() {
    let mut vec = int_vec(&[1, 2, 3]);

    vec.clear();

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
    assert_eq!(vec.element_width(), 4);

    vec.push_back(&9i32.to_le_bytes()).unwrap();
    assert_eq!(ints(&vec), [9]);
}

#[test]
fn test_destroy_is_idempotent() {
    let mut vec = int_vec(&[1, 2, 3]);

    vec.destroy();
    vec.destroy();

    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    assert_eq!(vec.top(), None);
    assert_eq!(vec.find(&1i32.to_le_bytes()), None);
    assert_eq!(
        vec.get(0),
        Err(DynVecError::OutOfBounds {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_from_bytes() {
    let vec = DynVec::from_bytes(2, b"aabbcc").unwrap();

    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
    assert_eq!(vec.get(1).unwrap(), b"bb");

    let empty = DynVec::from_bytes(3, b"").unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_try_clone_is_independent() {
    let mut original = int_vec(&[1, 2, 3]);
    let copy = original.try_clone().unwrap();

    original.set(0, &100i32.to_le_bytes()).unwrap();

    assert_eq!(ints(&copy), [1, 2, 3]);
    assert_eq!(copy.capacity(), 3);
    assert_ne!(original, copy);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a = int_vec(&[1, 2, 3]);
    let b = int_vec(&[1, 2, 3]);
    a.reserve(100).unwrap();

    assert_eq!(a, b);

    let bytes = DynVec::from_bytes(1, a.as_bytes()).unwrap();
    assert_ne!(a, bytes);
}
