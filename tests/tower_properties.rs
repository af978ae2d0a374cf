mod util;

use glass_tower::prelude::*;
use glass_tower::topology::triangular::exact_triangular_root;
use glass_tower::topology::uid::index_of;
use proptest::prelude::*;

proptest! {
    #[test]
    fn positions_follow_rows(number in 1usize..=21) {
        let mut t = Tower::new();
        for i in 0..number {
            t.add_glass(Glass::new(get_id(i))).unwrap();
        }
        for (r, row) in t.rows().enumerate() {
            for (c, glass) in row.iter().enumerate() {
                prop_assert_eq!(glass.position(), Some(Position::new(r, c)));
            }
        }
    }

    #[test]
    fn parent_counts_follow_edge_rule(rows in 1usize..=8) {
        let t = Tower::with_rows(rows);
        for glass in t.glasses() {
            let pos = glass.position().unwrap();
            let parents = t.get_parents(glass).unwrap().len();
            let want = if pos.row == 0 { 0 } else if pos.is_row_boundary() { 1 } else { 2 };
            prop_assert_eq!(parents, want, "glass {} at {}", glass, pos);
        }
    }

    #[test]
    fn volume_is_conserved(rows in 0usize..=7, volume in 0.0f64..20_000.0) {
        let mut t = Tower::with_rows(rows);
        let overflow = t.fill(volume).unwrap();
        prop_assert!(overflow >= 0.0);
        let held = t.total_quantity();
        prop_assert!((held + overflow - volume).abs() <= 1e-9 * volume.max(1.0));
        if volume <= t.total_capacity() {
            prop_assert!(held <= volume + 1e-9);
        }
        for glass in t.glasses() {
            prop_assert!(glass.quantity() >= 0.0 && glass.quantity() <= glass.capacity());
        }
    }

    #[test]
    fn small_volumes_stay_in_the_top_glass(volume in 0.0f64..=250.0) {
        let mut t = Tower::with_rows(4);
        prop_assert_eq!(t.fill(volume).unwrap(), 0.0);
        prop_assert_eq!(t.glasses()[0].quantity(), volume);
    }

    #[test]
    fn id_roundtrip(index in 0usize..1000) {
        let label = get_id(index);
        prop_assert_eq!(index_of(&label), Some(index));
        if index >= 26 {
            prop_assert_eq!(label, index.to_string());
        }
    }

    #[test]
    fn triangular_membership(n in 0usize..200) {
        let sequence: Vec<usize> = (0..25).map(triangular).collect();
        prop_assert_eq!(is_triangular(n), sequence.contains(&n));
        prop_assert_eq!(exact_triangular_root(n).is_some(), is_triangular(n));
    }
}
