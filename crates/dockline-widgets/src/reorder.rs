#![forbid(unsafe_code)]

//! The reorder engine: a single atomic move on the item list.
//!
//! All list mutation during a drag flows through this module. A move removes
//! the item from its old slot and reinserts it at the new one in one step;
//! list length and the multiset of items are invariant across the call, and
//! every other item shifts by at most one position.
//!
//! # Failure Modes
//!
//! - Item not found: silent no-op (not surfaced).
//! - Target index out of range: clamped, never panics.

/// Move `item` (located by `PartialEq` identity) to `new_index`.
///
/// Returns `true` if the list changed. No-op when the item is absent or
/// already at `new_index`. With duplicate-valued items the first match wins;
/// callers that need precise identity should track indices and use
/// [`move_index`] instead.
pub fn move_item<T: PartialEq>(items: &mut Vec<T>, item: &T, new_index: usize) -> bool {
    let Some(old_index) = items.iter().position(|it| it == item) else {
        return false;
    };
    move_index(items, old_index, new_index)
}

/// Move the item at `from` to `to`, clamping `to` into range.
///
/// Returns `true` if the list changed. No-op when `from` is out of range or
/// the clamped target equals `from`.
pub fn move_index<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn move_forward() {
        let mut items = vec!["person", "message", "call", "camera", "photo"];
        assert!(move_item(&mut items, &"call", 4));
        assert_eq!(items, vec!["person", "message", "camera", "photo", "call"]);
    }

    #[test]
    fn move_backward() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut items, &'d', 0));
        assert_eq!(items, vec!['d', 'a', 'b', 'c']);
    }

    #[test]
    fn move_to_current_index_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!move_item(&mut items, &2, 1));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn missing_item_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!move_item(&mut items, &9, 0));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_target_clamps() {
        let mut items = vec![1, 2, 3];
        assert!(move_item(&mut items, &1, 99));
        assert_eq!(items, vec![2, 3, 1]);
    }

    #[test]
    fn move_index_out_of_range_from_is_noop() {
        let mut items = vec![1, 2, 3];
        assert!(!move_index(&mut items, 7, 0));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_list_is_noop() {
        let mut items: Vec<u8> = Vec::new();
        assert!(!move_index(&mut items, 0, 0));
        assert!(!move_item(&mut items, &1, 0));
    }

    #[test]
    fn duplicate_values_move_first_match() {
        let mut items = vec![1, 2, 1, 3];
        assert!(move_item(&mut items, &1, 3));
        assert_eq!(items, vec![2, 1, 3, 1]);
    }

    proptest! {
        #[test]
        fn preserves_length_and_multiset(
            items in proptest::collection::vec(0u8..20, 1..16),
            from in 0usize..16,
            to in 0usize..24,
        ) {
            let mut moved = items.clone();
            move_index(&mut moved, from, to);
            prop_assert_eq!(moved.len(), items.len());

            let mut a = moved;
            let mut b = items;
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn others_shift_by_at_most_one(
            len in 2usize..12,
            from in 0usize..12,
            to in 0usize..12,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let mut moved = items.clone();
            if move_index(&mut moved, from, to) {
                for (new_pos, &val) in moved.iter().enumerate() {
                    if val == from {
                        continue;
                    }
                    prop_assert!(new_pos.abs_diff(val) <= 1);
                }
            }
        }
    }
}
