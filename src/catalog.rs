//! The transform catalog.
//!
//! External search enumerates `DEFAULT_TRANSFORMS`, a curated subset that
//! covers the common linearization shapes without flooding the candidate
//! pool. The full set stays available through `ALL_TRANSFORMS` for explicit
//! opt-in. Ordering is enumeration order only and carries no semantics.

use crate::domain::TransformKind;

/// The curated default set handed to external search.
pub const DEFAULT_TRANSFORMS: [TransformKind; 5] = [
    TransformKind::Loge,
    TransformKind::Exp,
    TransformKind::Power2,
    TransformKind::Sqrt,
    TransformKind::Inv,
];

/// Every defined transform kind, in declaration order.
pub const ALL_TRANSFORMS: [TransformKind; 11] = [
    TransformKind::Abs,
    TransformKind::Loge,
    TransformKind::Log2,
    TransformKind::Log10,
    TransformKind::Exp,
    TransformKind::Power2,
    TransformKind::Power3,
    TransformKind::Power4,
    TransformKind::Sqrt,
    TransformKind::Inv,
    TransformKind::InvPower2,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Params;
    use crate::transform::Transform;

    #[test]
    fn default_set_is_a_subset_of_the_full_set() {
        for kind in DEFAULT_TRANSFORMS {
            assert!(ALL_TRANSFORMS.contains(&kind), "{:?}", kind);
        }
    }

    #[test]
    fn default_set_order_is_stable() {
        assert_eq!(
            DEFAULT_TRANSFORMS,
            [
                TransformKind::Loge,
                TransformKind::Exp,
                TransformKind::Power2,
                TransformKind::Sqrt,
                TransformKind::Inv,
            ]
        );
    }

    #[test]
    fn every_kind_declares_the_linear_param_pair() {
        for kind in ALL_TRANSFORMS {
            assert_eq!(kind.param_names(), ["a", "b"], "{:?}", kind);
        }
    }

    #[test]
    fn every_kind_requires_set_params_before_transform() {
        for kind in ALL_TRANSFORMS {
            let t = Transform::new(kind);
            assert!(t.transform(&[1.0]).is_err(), "{:?}", kind);
        }
    }

    #[test]
    fn complexity_table_matches_declared_values() {
        let expected = [
            (TransformKind::Abs, 50),
            (TransformKind::Loge, 26),
            (TransformKind::Log2, 25),
            (TransformKind::Log10, 35),
            (TransformKind::Exp, 40),
            (TransformKind::Power2, 60),
            (TransformKind::Power3, 90),
            (TransformKind::Power4, 120),
            (TransformKind::Sqrt, 33),
            (TransformKind::Inv, 37),
            (TransformKind::InvPower2, 67),
        ];
        for (kind, complexity) in expected {
            assert_eq!(kind.complexity(), complexity, "{:?}", kind);
        }
    }

    #[test]
    fn simple_kernel_complexity_ordering() {
        // Log2 < Loge < Log10 < Exp < Abs
        let order = [
            TransformKind::Log2,
            TransformKind::Loge,
            TransformKind::Log10,
            TransformKind::Exp,
            TransformKind::Abs,
        ];
        for pair in order.windows(2) {
            assert!(
                pair[0].complexity() < pair[1].complexity(),
                "{:?} should rank simpler than {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn default_kinds_apply_cleanly_on_a_positive_series() {
        // A strictly positive series is inside every default kernel's domain,
        // so transformed output must validate as all-finite.
        let x = [0.5, 1.0, 2.0, 4.0];
        for kind in DEFAULT_TRANSFORMS {
            let mut t = Transform::new(kind);
            t.set_params(Params::new(1.0, 0.0));
            let y = t.transform(&x).unwrap();
            assert!(t.validate_input(&y), "{:?} produced {y:?}", kind);
        }
    }
}
