use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
    #[error("cannot cycle through an empty set of values")]
    InvalidConfiguration,
}

// Rotates through a fixed, ordered set of values, one step per call
#[derive(Debug)]
pub struct Cycler<T> {
    values: Vec<T>,
    position: usize,
}

impl<T: Copy> Cycler<T> {
    // Build a cycler positioned on the first value
    pub fn new(values: Vec<T>) -> Result<Self, CycleError> {
        if values.is_empty() {
            return Err(CycleError::InvalidConfiguration);
        }
        Ok(Self { values, position: 0 })
    }

    // Step to the next value, wrapping past the end
    pub fn advance(&mut self) -> T {
        self.position = (self.position + 1) % self.values.len();
        self.values[self.position]
    }

    // The value at the current position
    pub fn current(&self) -> T {
        self.values[self.position]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_first_value() {
        let colors = Cycler::new(vec!["green", "orange", "pink"]).unwrap();
        assert_eq!(colors.current(), "green");
    }

    #[test]
    fn first_advance_returns_the_second_value() {
        let mut colors = Cycler::new(vec!["green", "orange", "pink"]).unwrap();
        assert_eq!(colors.advance(), "orange");
    }

    #[test]
    fn visits_every_value_once_per_period() {
        let values = vec!["a", "b", "c", "d"];
        let mut cycler = Cycler::new(values.clone()).unwrap();
        let seen: Vec<_> = (0..values.len()).map(|_| cycler.advance()).collect();
        assert_eq!(seen, vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn site_sequence_repeats_every_three_calls() {
        let mut colors = Cycler::new(vec!["green", "orange", "pink"]).unwrap();
        let seen: Vec<_> = (0..9).map(|_| colors.advance()).collect();
        let period = ["orange", "pink", "green"];
        assert_eq!(seen, period.repeat(3));
    }

    #[test]
    fn advance_always_returns_a_member() {
        let values = vec![1, 2, 3];
        let mut cycler = Cycler::new(values.clone()).unwrap();
        for _ in 0..20 {
            assert!(values.contains(&cycler.advance()));
        }
    }

    #[test]
    fn single_value_cycles_to_itself() {
        let mut cycler = Cycler::new(vec![42]).unwrap();
        assert_eq!(cycler.advance(), 42);
        assert_eq!(cycler.advance(), 42);
        assert_eq!(cycler.current(), 42);
    }

    #[test]
    fn empty_values_are_rejected() {
        let cycler = Cycler::<&str>::new(vec![]);
        assert_eq!(cycler.unwrap_err(), CycleError::InvalidConfiguration);
    }
}
