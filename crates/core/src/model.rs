/// A callable model that maps an input to an output.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Utility {
        risk_aversion: f64,
    }

    impl Model for Utility {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, consumption: &f64) -> Result<f64, Self::Error> {
            let gamma = self.risk_aversion;
            Ok(consumption.powf(1.0 - gamma) / (1.0 - gamma))
        }
    }

    #[test]
    fn snapshot_captures_call() {
        let model = Utility { risk_aversion: 2.0 };
        let input = 4.0;
        let output = model.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot, Snapshot::new(4.0, -0.25));
    }
}
