use rand::Rng;

/// Draws one ticker from the pool, each with equal probability.
/// Returns `None` for an empty pool.
pub fn select_puzzle_ticker<'a, R>(pool: &'a [String], rng: &mut R) -> Option<&'a String>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.gen_range(0..pool.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(tickers: &[&str]) -> Vec<String> {
        tickers.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_fixed_entropy_selects_second_candidate() {
        // The top half of the 64-bit range maps to index 1 of 2
        let mut rng = StepRng::new(1 << 63, 0);
        let pool = pool(&["AAPL", "MSFT"]);
        assert_eq!(
            select_puzzle_ticker(&pool, &mut rng).map(String::as_str),
            Some("MSFT")
        );
    }

    #[test]
    fn test_fixed_entropy_selects_first_candidate() {
        let mut rng = StepRng::new(0, 0);
        let pool = pool(&["AAPL", "MSFT"]);
        assert_eq!(
            select_puzzle_ticker(&pool, &mut rng).map(String::as_str),
            Some("AAPL")
        );
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_puzzle_ticker(&[], &mut rng).is_none());
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = pool(&["NVDA"]);
        for _ in 0..10 {
            assert_eq!(
                select_puzzle_ticker(&pool, &mut rng).map(String::as_str),
                Some("NVDA")
            );
        }
    }

    #[test]
    fn test_every_candidate_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = pool(&["AAPL", "MSFT", "NVDA", "AMZN", "GOOGL"]);
        let mut counts = [0usize; 5];
        for _ in 0..5_000 {
            let pick = select_puzzle_ticker(&pool, &mut rng).unwrap();
            let idx = pool.iter().position(|t| t == pick).unwrap();
            counts[idx] += 1;
        }
        // Expected 1000 each
        for count in counts {
            assert!((850..=1150).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}
