use super::{AnswerSetModel, ValidationResult};

/// Canonicalizes one model by sorting its atoms lexicographically.
///
/// Duplicate atoms, would the solver ever emit some, are kept as duplicate
/// tokens; canonicalization only reorders.
pub fn canonicalize_model(model: AnswerSetModel) -> AnswerSetModel {
    let mut atoms = model.into_atoms();
    atoms.sort_unstable();
    AnswerSetModel::new(atoms)
}

/// Canonicalizes a result into its order-independent signature.
///
/// Every model is canonicalized individually, then the model sequence itself
/// is sorted. The solver enumerates answer sets in an internally-determined
/// order and prints atoms in derivation order; the double sort collapses both
/// nondeterministic dimensions, so that two runs of the same scenario always
/// canonicalize to the same value. The operation is idempotent.
///
/// # Example
///
/// ```
/// # use asporacle::transcript::{canonicalize_result, TranscriptParser};
/// let parser = TranscriptParser::for_authored_output();
/// let r0 = parser.parse_enumeration("Answer: 1\nb a\nSATISFIABLE").unwrap();
/// let r1 = parser.parse_enumeration("Answer: 1\na b\nSATISFIABLE").unwrap();
/// assert_ne!(r0, r1);
/// assert_eq!(canonicalize_result(r0), canonicalize_result(r1));
/// ```
pub fn canonicalize_result(result: ValidationResult) -> ValidationResult {
    let (satisfiable, models) = result.into_parts();
    let mut canonical = models
        .into_iter()
        .map(canonicalize_model)
        .collect::<Vec<AnswerSetModel>>();
    canonical.sort_unstable();
    ValidationResult::new(satisfiable, canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(atoms: &[&str]) -> AnswerSetModel {
        AnswerSetModel::new(atoms.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn test_canonicalize_model_sorts_atoms() {
        let m = canonicalize_model(model(&["robot(1,2,2,1)", "robot(1,2,2,0)"]));
        assert_eq!(model(&["robot(1,2,2,0)", "robot(1,2,2,1)"]), m);
    }

    #[test]
    fn test_canonicalize_model_keeps_duplicates() {
        let m = canonicalize_model(model(&["b", "a", "b"]));
        assert_eq!(model(&["a", "b", "b"]), m);
    }

    #[test]
    fn test_canonicalize_result_sorts_models() {
        let r = canonicalize_result(ValidationResult::new(
            true,
            vec![model(&["move(1,1,0,1)"]), model(&["move(1,0,-1,1)"])],
        ));
        assert_eq!(
            ValidationResult::new(
                true,
                vec![model(&["move(1,0,-1,1)"]), model(&["move(1,1,0,1)"])],
            ),
            r
        );
    }

    #[test]
    fn test_canonicalize_result_is_order_invariant() {
        let r0 = ValidationResult::new(
            true,
            vec![model(&["b", "a"]), model(&["c"]), AnswerSetModel::empty()],
        );
        let r1 = ValidationResult::new(
            true,
            vec![AnswerSetModel::empty(), model(&["c"]), model(&["a", "b"])],
        );
        assert_eq!(
            canonicalize_result(r0.clone()),
            canonicalize_result(r1.clone())
        );
        assert_ne!(r0, r1);
    }

    #[test]
    fn test_canonicalize_result_is_idempotent() {
        let r = ValidationResult::new(
            true,
            vec![model(&["c", "a"]), model(&["b"]), model(&["b", "a"])],
        );
        let once = canonicalize_result(r);
        let twice = canonicalize_result(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalize_result_preserves_atom_multiset() {
        let r = ValidationResult::new(true, vec![model(&["c", "a", "c"]), model(&["b", "a"])]);
        let canonical = canonicalize_result(r);
        let mut all_atoms = canonical
            .models()
            .iter()
            .flat_map(|m| m.atoms().iter().cloned())
            .collect::<Vec<String>>();
        all_atoms.sort_unstable();
        assert_eq!(vec!["a", "a", "b", "c", "c"], all_atoms);
    }

    #[test]
    fn test_canonicalize_result_keeps_verdict() {
        let r = canonicalize_result(ValidationResult::new(false, vec![]));
        assert!(!r.is_satisfiable());
        assert_eq!(0, r.n_models());
    }

    #[test]
    fn test_identical_models_are_kept() {
        // two distinct answer sets may print the same atoms
        let r = canonicalize_result(ValidationResult::new(
            true,
            vec![model(&["a", "b"]), model(&["b", "a"])],
        ));
        assert_eq!(2, r.n_models());
        assert_eq!(r.models()[0], r.models()[1]);
    }
}
