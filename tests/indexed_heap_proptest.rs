use proptest::prelude::*;
use trellis::IndexedMinHeap;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Poll,
}

proptest! {
    #[test]
    fn test_indexed_heap_matches_sorted_model(ops in proptest::collection::vec(
        prop_oneof![
            any::<u8>().prop_map(Operation::Insert),
            any::<u8>().prop_map(Operation::Remove),
            Just(Operation::Poll),
        ],
        1..200
    )) {
        let mut model: Vec<u8> = Vec::new();
        let mut heap = IndexedMinHeap::new();

        for op in ops {
            match op {
                Operation::Insert(v) => {
                    model.push(v);
                    heap.insert(v);
                }
                Operation::Remove(v) => {
                    let expected = model.iter().position(|&x| x == v).map(|i| model.swap_remove(i));
                    prop_assert_eq!(heap.remove(&v), expected, "Remove result mismatch for {}", v);
                }
                Operation::Poll => {
                    let expected = model.iter().copied().min();
                    if let Some(min) = expected {
                        let i = model.iter().position(|&x| x == min).unwrap();
                        model.swap_remove(i);
                    }
                    prop_assert_eq!(heap.poll(), expected, "Poll result mismatch");
                }
            }
            prop_assert!(heap.check_invariants());
            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.peek().copied(), model.iter().copied().min());
        }

        // Final consistency check
        model.sort_unstable();
        let mut drained = Vec::new();
        while let Some(x) = heap.poll() {
            drained.push(x);
        }
        prop_assert_eq!(drained, model);
    }
}
