use std::collections::BTreeSet;

use crate::error::MatroidError;

use super::Matroid;

/// Base matroid with an independent set of fixed elements contracted.
///
/// The ground set excludes the fixed elements; a subset is independent iff it
/// stays independent in the base matroid together with the fixed elements.
#[derive(Clone, Debug)]
pub struct FixedElements<E, M> {
    base: M,
    fixed: BTreeSet<E>,
    elements: BTreeSet<E>,
}

impl<E: Ord + Clone, M: Matroid<E>> FixedElements<E, M> {
    pub fn new(base: M, fixed: BTreeSet<E>) -> Result<Self, MatroidError> {
        if !fixed.is_subset(base.elements()) {
            return Err(MatroidError::FixedNotInElements);
        }
        if base.find_circuit(&fixed)?.is_some() {
            return Err(MatroidError::FixedDependent);
        }
        let elements = base.elements().difference(&fixed).cloned().collect();
        Ok(Self {
            base,
            fixed,
            elements,
        })
    }

    pub fn fixed(&self) -> &BTreeSet<E> {
        &self.fixed
    }

    pub fn base(&self) -> &M {
        &self.base
    }
}

impl<E: Ord + Clone, M: Matroid<E>> Matroid<E> for FixedElements<E, M> {
    fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    /// Base circuit of `subset ∪ fixed` with the fixed elements removed.
    fn find_circuit_unchecked(&self, subset: &BTreeSet<E>) -> Option<BTreeSet<E>> {
        let joined: BTreeSet<E> = subset.union(&self.fixed).cloned().collect();
        let circuit = self.base.find_circuit_unchecked(&joined)?;
        Some(circuit.difference(&self.fixed).cloned().collect())
    }
}
