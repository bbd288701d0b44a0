/// Defines a function approximation problem.
///
/// An approximation problem maps a scalar point of the approximation domain
/// to a model input, then extracts the value to be approximated from the
/// model input and output. Approximation solvers sample the model at
/// interpolation nodes and fit a polynomial to the extracted values.
pub trait ApproximationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps a point of the approximation domain into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Extracts the approximated value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the value cannot be extracted.
    fn value(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
