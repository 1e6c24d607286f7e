use tripletdeque::{DequeError, TripletDeque};

#[test]
fn test_stack_push_operations() {
    let mut deque = TripletDeque::new();

    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);

    assert!(deque.push("first").is_ok());
    assert_eq!(deque.len(), 1);
    assert!(!deque.is_empty());

    assert!(deque.push("second").is_ok());
    assert_eq!(deque.len(), 2);

    assert!(deque.push("third").is_ok());
    assert_eq!(deque.len(), 3);

    // The top of the stack is the front of the deque
    assert_eq!(deque.get(0), Some(&"third"));
    assert_eq!(deque.get(1), Some(&"second"));
    assert_eq!(deque.get(2), Some(&"first"));
}

#[test]
fn test_stack_peek_operations() {
    let mut deque = TripletDeque::new();

    assert_eq!(deque.peek(), None);

    deque.push("bottom").unwrap();
    assert_eq!(deque.peek(), Some(&"bottom"));

    deque.push("middle").unwrap();
    assert_eq!(deque.peek(), Some(&"middle"));

    deque.push("top").unwrap();
    assert_eq!(deque.peek(), Some(&"top"));

    // Peeking does not modify the stack
    assert_eq!(deque.len(), 3);
    assert_eq!(deque.peek_first(), Some(&"top"));
    assert_eq!(deque.peek_last(), Some(&"bottom"));
}

#[test]
fn test_stack_push_pop_operations() {
    let mut deque = TripletDeque::new();

    deque.push("first").unwrap();
    deque.push("second").unwrap();
    deque.push("third").unwrap();

    assert_eq!(deque.pop(), Ok("third"));
    assert_eq!(deque.pop(), Ok("second"));
    assert_eq!(deque.pop(), Ok("first"));

    assert!(deque.is_empty());
    assert_eq!(deque.pop(), Err(DequeError::EmptyContainer));
}

#[test]
fn test_stack_lifo_across_blocks() {
    let mut deque = TripletDeque::new();

    for value in 0..37 {
        deque.add_first(value).unwrap();
    }
    for expected in (0..37).rev() {
        assert_eq!(deque.remove_first(), Ok(expected));
    }
    assert!(deque.is_empty());
}

#[test]
fn test_stack_lifo_at_the_back() {
    let mut deque = TripletDeque::new();

    for value in 0..23 {
        deque.add_last(value).unwrap();
    }
    for expected in (0..23).rev() {
        assert_eq!(deque.remove_last(), Ok(expected));
    }
    assert!(deque.is_empty());
}

#[test]
fn test_stack_interleaved_push_pop() {
    let mut deque = TripletDeque::new();

    deque.push(1).unwrap();
    deque.push(2).unwrap();
    assert_eq!(deque.pop(), Ok(2));

    deque.push(3).unwrap();
    deque.push(4).unwrap();
    assert_eq!(deque.pop(), Ok(4));
    assert_eq!(deque.pop(), Ok(3));

    deque.push(5).unwrap();
    assert_eq!(deque.to_vec(), vec![5, 1]);
}

#[test]
fn test_stack_full() {
    let mut deque = TripletDeque::with_max_size(2).unwrap();

    deque.push('a').unwrap();
    deque.push('b').unwrap();
    assert_eq!(
        deque.push('c'),
        Err(DequeError::CapacityExceeded { max_size: 2 })
    );
    assert!(!deque.offer_first('c'));
    assert_eq!(deque.len(), 2);
    assert_eq!(deque.pop(), Ok('b'));
}

#[test]
fn test_stack_mixed_with_queue_operations() {
    let mut deque = TripletDeque::new();

    deque.push("stack_data").unwrap();
    deque.add("queue_data").unwrap();

    // Both views work on the same underlying data
    assert_eq!(deque.peek(), Some(&"stack_data"));
    assert_eq!(deque.peek_last(), Some(&"queue_data"));
    assert_eq!(deque.pop(), Ok("stack_data"));
    assert_eq!(deque.remove(), Ok("queue_data"));
}
