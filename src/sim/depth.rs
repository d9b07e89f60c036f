//! Painter's-algorithm ordering
//!
//! Orbs are drawn farthest first so nearer ones overdraw them without a depth
//! buffer. Positions change every tick, so the order is rebuilt every tick.

use glam::Vec3;

use super::pool::Orb;

/// Slot indices of `orbs` ordered by descending distance from `viewer`
///
/// Stable: orbs at equal distance keep their slot order.
pub fn depth_order(viewer: Vec3, orbs: &[Orb]) -> Vec<usize> {
    let mut keyed: Vec<(usize, f32)> = orbs
        .iter()
        .enumerate()
        .map(|(i, orb)| (i, viewer.distance(orb.center)))
        .collect();
    let mut scratch = Vec::with_capacity(keyed.len());
    merge_sort_desc(&mut keyed, &mut scratch);
    keyed.into_iter().map(|(i, _)| i).collect()
}

/// Top-down merge sort, larger key first; recursion depth is log2(len)
fn merge_sort_desc(items: &mut [(usize, f32)], scratch: &mut Vec<(usize, f32)>) {
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort_desc(&mut items[..mid], scratch);
    merge_sort_desc(&mut items[mid..], scratch);

    scratch.clear();
    let (left, right) = items.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // >= keeps the left element first on ties
        if left[i].1 >= right[j].1 {
            scratch.push(left[i]);
            i += 1;
        } else {
            scratch.push(right[j]);
            j += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    items.copy_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn orb_at(center: Vec3) -> Orb {
        Orb {
            center,
            radius: 10.0,
            azimuth: 0.0,
            inclination: 0.0,
            speed: 0.0,
            satellites: Vec::new(),
        }
    }

    #[test]
    fn test_farthest_first() {
        let orbs = vec![
            orb_at(Vec3::new(10.0, 0.0, 0.0)),
            orb_at(Vec3::new(0.0, 300.0, 0.0)),
            orb_at(Vec3::new(0.0, 0.0, -50.0)),
            orb_at(Vec3::new(-700.0, 0.0, 0.0)),
        ];
        assert_eq!(depth_order(Vec3::ZERO, &orbs), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_slot_order() {
        let orbs = vec![
            orb_at(Vec3::new(5.0, 0.0, 0.0)),
            orb_at(Vec3::new(0.0, 5.0, 0.0)),
            orb_at(Vec3::new(0.0, 0.0, 9.0)),
            orb_at(Vec3::new(0.0, -5.0, 0.0)),
        ];
        assert_eq!(depth_order(Vec3::ZERO, &orbs), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(depth_order(Vec3::ZERO, &[]).is_empty());
        assert_eq!(depth_order(Vec3::ONE, &[orb_at(Vec3::ZERO)]), vec![0]);
    }

    proptest! {
        #[test]
        fn order_is_non_increasing_permutation(
            coords in proptest::collection::vec((-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0), 0..200),
            vx in -500.0f32..500.0,
        ) {
            let viewer = Vec3::new(vx, 0.0, 0.0);
            let orbs: Vec<Orb> = coords.iter().map(|&(x, y, z)| orb_at(Vec3::new(x, y, z))).collect();
            let order = depth_order(viewer, &orbs);

            let mut seen = order.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..orbs.len()).collect::<Vec<_>>());

            for pair in order.windows(2) {
                let a = viewer.distance(orbs[pair[0]].center);
                let b = viewer.distance(orbs[pair[1]].center);
                prop_assert!(a >= b);
            }
        }
    }
}
