use super::IntegerCostProblem;
use crate::bits::BitVector;

/// The OneMax problem: maximize the number of 1 bits.
///
/// Cost is the number of 0 bits, so the all-ones vector has the minimum
/// cost 0. The bit length is a property of the candidates, not the problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneMax;

impl IntegerCostProblem for OneMax {
    type Candidate = BitVector;

    fn cost(&self, candidate: &BitVector) -> i64 {
        candidate.count_zeros() as i64
    }

    fn value(&self, candidate: &BitVector) -> i64 {
        candidate.count_ones() as i64
    }

    fn min_cost(&self) -> i64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_and_value() {
        let v = BitVector::from_bools(&[true, false, true, true, false]);
        assert_eq!(OneMax.cost(&v), 2);
        assert_eq!(OneMax.value(&v), 3);
    }

    #[test]
    fn test_all_ones_is_minimum() {
        let v = BitVector::from_bools(&[true; 10]);
        assert_eq!(OneMax.cost(&v), 0);
        assert!(OneMax.is_minimum_cost(OneMax.cost(&v)));
    }

    #[test]
    fn test_all_zeros_is_worst() {
        let v = BitVector::new(10);
        assert_eq!(OneMax.cost(&v), 10);
        assert_eq!(OneMax.value(&v), 0);
        assert!(!OneMax.is_minimum_cost(10));
    }
}
