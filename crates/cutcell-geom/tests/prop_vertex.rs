use cutcell_geom::{Vertex, pairs};
use proptest::num::f64::NORMAL;
use proptest::prelude::*;

fn bounded_f64() -> impl Strategy<Value = f64> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e9)
}

fn arb_vertex() -> impl Strategy<Value = Vertex> {
    (bounded_f64(), bounded_f64()).prop_map(|(x, z)| Vertex::new(x, z))
}

proptest! {
    // Equal vertices share a key; copies are equal
    #[test]
    fn copies_share_key(a in arb_vertex()) {
        let b = Vertex::new(a.x, a.z);
        prop_assert_eq!(a.key(), b.key());
    }

    // n values produce n - 1 pairs that chain end to start
    #[test]
    fn pairs_chain(v in proptest::collection::vec(bounded_f64(), 0..32)) {
        let p = pairs(&v);
        prop_assert_eq!(p.len(), v.len().saturating_sub(1));
        for w in p.windows(2) {
            prop_assert_eq!(w[0].1, w[1].0);
        }
    }
}
