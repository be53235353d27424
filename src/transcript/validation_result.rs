use std::fmt::{self, Display};

/// A single answer set, as enumerated by the solver.
///
/// An answer set is a collection of atom tokens (e.g. `move(1,0,-1,1)`).
/// Atoms are opaque strings; they are kept in the order they were built with,
/// which is the solver's print order until [canonicalize_model] is applied.
/// Duplicate atoms are legal and preserved.
///
/// Models compare as sequences of atoms, using the standard lexicographic
/// sequence ordering (a strict prefix sorts before its extensions).
///
/// [canonicalize_model]: crate::transcript::canonicalize_model
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct AnswerSetModel {
    atoms: Vec<String>,
}

impl AnswerSetModel {
    /// Builds a model from its atom tokens.
    pub fn new(atoms: Vec<String>) -> Self {
        AnswerSetModel { atoms }
    }

    /// Builds the empty model (no facts hold beyond those forced by the scenario).
    pub fn empty() -> Self {
        AnswerSetModel { atoms: Vec::new() }
    }

    /// Returns the atoms of this model, in their current order.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Consumes the model, returning its atoms.
    pub fn into_atoms(self) -> Vec<String> {
        self.atoms
    }

    /// Returns the number of atoms in this model.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` iff this model contains no atom.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl Display for AnswerSetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.atoms.join(" "))
    }
}

/// The outcome of one solver invocation, after transcript parsing.
///
/// Two results are equal iff their satisfiability verdicts match and their
/// model sequences are element-wise equal. Comparing results obtained from
/// independent solver runs only makes sense after both went through
/// [canonicalize_result](crate::transcript::canonicalize_result), since the
/// solver's enumeration order is nondeterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationResult {
    satisfiable: bool,
    models: Vec<AnswerSetModel>,
}

impl ValidationResult {
    /// Builds a result from a verdict and a sequence of models.
    pub fn new(satisfiable: bool, models: Vec<AnswerSetModel>) -> Self {
        ValidationResult {
            satisfiable,
            models,
        }
    }

    /// Returns `true` iff the solver reported the scenario satisfiable.
    pub fn is_satisfiable(&self) -> bool {
        self.satisfiable
    }

    /// Returns the models of this result, in their current order.
    pub fn models(&self) -> &[AnswerSetModel] {
        &self.models
    }

    /// Returns the number of models in this result.
    pub fn n_models(&self) -> usize {
        self.models.len()
    }

    /// Consumes the result, returning the verdict and the models.
    pub fn into_parts(self) -> (bool, Vec<AnswerSetModel>) {
        (self.satisfiable, self.models)
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "satisfiable: {}, models: [", self.satisfiable)?;
        for (i, m) in self.models.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(atoms: &[&str]) -> AnswerSetModel {
        AnswerSetModel::new(atoms.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn test_model_ordering_is_lexicographic() {
        assert!(model(&["a"]) < model(&["b"]));
        assert!(model(&["a", "b"]) < model(&["b"]));
        assert!(model(&["a"]) < model(&["a", "a"]));
        assert!(model(&[]) < model(&["a"]));
    }

    #[test]
    fn test_model_equality_is_order_sensitive() {
        assert_ne!(model(&["a", "b"]), model(&["b", "a"]));
        assert_eq!(model(&["a", "b"]), model(&["a", "b"]));
    }

    #[test]
    fn test_empty_model() {
        let m = AnswerSetModel::empty();
        assert!(m.is_empty());
        assert_eq!(0, m.len());
        assert_eq!("{}", m.to_string());
    }

    #[test]
    fn test_model_display() {
        assert_eq!("{a b c}", model(&["a", "b", "c"]).to_string());
    }

    #[test]
    fn test_result_equality() {
        let r0 = ValidationResult::new(true, vec![model(&["a"]), model(&["b"])]);
        let r1 = ValidationResult::new(true, vec![model(&["a"]), model(&["b"])]);
        let r2 = ValidationResult::new(true, vec![model(&["b"]), model(&["a"])]);
        let r3 = ValidationResult::new(false, vec![model(&["a"]), model(&["b"])]);
        assert_eq!(r0, r1);
        assert_ne!(r0, r2);
        assert_ne!(r0, r3);
    }

    #[test]
    fn test_result_display() {
        let r = ValidationResult::new(true, vec![model(&["a", "b"]), AnswerSetModel::empty()]);
        assert_eq!("satisfiable: true, models: [{a b}, {}]", r.to_string());
    }

    #[test]
    fn test_result_into_parts() {
        let r = ValidationResult::new(false, vec![model(&["a"])]);
        let (satisfiable, models) = r.into_parts();
        assert!(!satisfiable);
        assert_eq!(1, models.len());
    }
}
