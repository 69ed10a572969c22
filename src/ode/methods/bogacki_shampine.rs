//! Bogacki–Shampine 3(2)
//!
//! Third-order method with an embedded second-order solution. The last stage is
//! evaluated at the new solution (first same as last), which is what makes the
//! embedded estimate available for one extra evaluation.
//!
//! # Characteristics
//!
//! - **Order**: 3, embedded 2
//! - **Stages**: 4

use super::Tableau;

pub(super) static TABLEAU: Tableau = Tableau {
    c: &[(0, 1), (1, 2), (3, 4), (1, 1)],
    a: &[
        &[],
        &[(1, 2)],
        &[(0, 1), (3, 4)],
        &[(2, 9), (1, 3), (4, 9)],
    ],
    b: &[(2, 9), (1, 3), (4, 9), (0, 1)],
    b_hat: &[(7, 24), (1, 4), (1, 3), (1, 8)],
};
