//! Property tests over random small cones.

use proptest::prelude::*;
use zcone::prelude::*;
use zcone::rand::RowCount;

fn small_cfg() -> RandomConeCfg {
    RandomConeCfg {
        ambient_dimension: 3,
        inequalities: RowCount::Uniform { min: 2, max: 6 },
        equations: RowCount::Uniform { min: 0, max: 1 },
        entry_bound: 2,
        bias_towards_positive: 0.7,
    }
}

fn token() -> impl Strategy<Value = ReplayToken> {
    (any::<u64>(), 0u64..1024).prop_map(|(seed, index)| ReplayToken::new(seed, index))
}

/// Signed coordinate permutation applied to every row.
fn transform(m: &ZMatrix, perm: &[usize], signs: &[bool]) -> ZMatrix {
    let rows = m
        .iter()
        .map(|r| {
            let mut out = ZVector::zeros(r.len());
            for (i, &p) in perm.iter().enumerate() {
                out[p] = if signs[i] { -r[i].clone() } else { r[i].clone() };
            }
            out
        })
        .collect();
    ZMatrix::from_rows(m.width(), rows)
}

fn transform_vector(v: &ZVector, perm: &[usize], signs: &[bool]) -> ZVector {
    let m = ZMatrix::from_rows(v.len(), vec![v.clone()]);
    transform(&m, perm, signs).row(0).clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn state_is_monotone_and_canonicalize_idempotent(tok in token()) {
        let c = draw_cone(small_cfg(), tok);
        let mut last = c.state();
        for target in [ConeState::EquationsKnown, ConeState::Raw, ConeState::FacetsKnown, ConeState::Canonical] {
            c.ensure_state_as_minimum(target);
            prop_assert!(c.state() >= last);
            last = c.state();
        }
        let snapshot = (c.inequalities(), c.equations());
        c.canonicalize();
        prop_assert_eq!((c.inequalities(), c.equations()), snapshot);
    }

    #[test]
    fn reduction_preserves_the_point_set(tok in token()) {
        let raw = draw_cone(small_cfg(), tok);
        let reduced = raw.clone();
        reduced.canonicalize();
        let p = reduced.get_relative_interior_point();
        prop_assert!(raw.contains(&p));
        prop_assert!(reduced.contains_relatively(&p));
        for r in reduced.extreme_rays(None).iter() {
            prop_assert!(raw.contains(r));
        }
        prop_assert_eq!(raw.dimension(), reduced.dimension());
    }

    #[test]
    fn faces_at_extreme_rays_are_rays(tok in token()) {
        let c = draw_cone(small_cfg(), tok);
        for r in c.extreme_rays(None).iter() {
            let f = c.face_containing(r);
            prop_assert_eq!(f.dimension(), f.dimension_of_lineality_space() + 1);
            prop_assert!(c.has_face(&f));
        }
    }

    #[test]
    fn double_dual_is_identity(tok in token()) {
        let c = draw_cone(small_cfg(), tok);
        let dd = c.dual_cone().dual_cone();
        prop_assert_eq!(dd, c);
    }

    #[test]
    fn unique_point_is_equivariant(
        tok in token(),
        perm in Just(vec![0usize, 1, 2]).prop_shuffle(),
        signs in proptest::collection::vec(any::<bool>(), 3),
    ) {
        let c = draw_cone(small_cfg(), tok);
        let t = Cone::new(
            transform(&c.inequalities(), &perm, &signs),
            transform(&c.equations(), &perm, &signs),
            Preassumptions::NONE,
        );
        c.canonicalize();
        t.canonicalize();
        prop_assert_eq!(t.get_unique_point(), transform_vector(&c.get_unique_point(), &perm, &signs));
    }

    #[test]
    fn self_intersection_is_equal(tok in token()) {
        let c = draw_cone(small_cfg(), tok);
        prop_assert_eq!(intersection(&c, &c), c);
    }

    #[test]
    fn product_dimensions_add(a in token(), b in token()) {
        let ca = draw_cone(small_cfg(), a);
        let cb = draw_cone(small_cfg(), b);
        let p = product(&ca, &cb);
        prop_assert_eq!(p.ambient_dimension(), ca.ambient_dimension() + cb.ambient_dimension());
        prop_assert_eq!(p.dimension(), ca.dimension() + cb.dimension());
        prop_assert_eq!(
            p.dimension_of_lineality_space(),
            ca.dimension_of_lineality_space() + cb.dimension_of_lineality_space()
        );
    }

    #[test]
    fn cone_given_by_rays_contains_its_generators(tok in token()) {
        let g = draw_rays(small_cfg(), tok);
        let c = Cone::given_by_rays(&g, &ZMatrix::new(3));
        prop_assert!(c.contains_rows_of(&g));
        let raw = Cone::new(c.inequalities(), c.equations(), Preassumptions::NONE);
        prop_assert_eq!(raw, c);
    }
}

#[test]
fn orthants_are_simplicial() {
    for n in 1..=5 {
        let o = Cone::positive_orthant(n);
        assert_eq!(o.facets().height(), n);
        assert!(o.is_simplicial());
        assert!(o.contains(&ZVector::from_i64(&vec![1; n])));
        assert!(o.contains(&ZVector::zeros(n)));
        let mut minus = vec![0; n];
        minus[0] = -1;
        assert!(!o.contains(&ZVector::from_i64(&minus)));
    }
}
